use crate::estimation::EstimationResult;
use chrono::TimeZone;
use std::fmt::Display;

const HEADERS: [&str; 4] = ["Date", "Points", "Estimated Area", "Image Dimensions"];

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Area rounded to whole square pixels for display.
pub fn format_area(area: f64) -> String {
    format!("{} px²", group_thousands(area.round() as u64))
}

/// Renders the history as a plain-text table, most recent first, with
/// timestamps shown in `tz`.
pub fn render_history<Tz>(results: &[EstimationResult], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if results.is_empty() {
        return "No results yet.\n".to_string();
    }

    let rows: Vec<[String; 4]> = results
        .iter()
        .rev()
        .map(|r| {
            [
                r.created_at()
                    .with_timezone(tz)
                    .format("%-m/%-d/%y, %-I:%M %p")
                    .to_string(),
                format!("{} / {}", r.points_inside(), r.sample_count()),
                format_area(r.estimated_area()),
                r.image_dimensions().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
