use crate::estimation::EstimationResult;
use chrono::SecondsFormat;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Report layouts for exporting the result history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumMessage, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HistoryFormat {
    #[strum(message = "CSV", detailed_message = "Comma-separated values.")]
    Csv,
    #[strum(message = "TSV", detailed_message = "Tab-separated values.")]
    Tsv,
    #[strum(message = "JSON", detailed_message = "Pretty-printed array of results.")]
    Json,
}

impl HistoryFormat {
    pub fn extension(self) -> &'static str {
        self.into()
    }

    pub fn write_to_path<P: AsRef<Path>>(
        self,
        results: &[EstimationResult],
        path: P,
    ) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write(results, &mut w)?;
        w.flush()
    }

    pub fn write<W: Write>(self, results: &[EstimationResult], w: &mut W) -> Result<(), Error> {
        match self {
            HistoryFormat::Csv => write_with_delimiter(results, w, ','),
            HistoryFormat::Tsv => write_with_delimiter(results, w, '\t'),
            HistoryFormat::Json => write_json(results, w),
        }
    }
}

fn write_with_delimiter<W: Write>(
    results: &[EstimationResult],
    w: &mut W,
    delimiter: char,
) -> Result<(), Error> {
    writeln!(
        w,
        "id{d}created_at{d}width{d}height{d}sample_count{d}points_inside{d}estimated_area{d}source",
        d = delimiter
    )?;
    for r in results {
        let dims = r.image_dimensions();
        writeln!(
            w,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{:.6}{d}{}",
            r.id(),
            r.created_at().to_rfc3339_opts(SecondsFormat::Millis, true),
            dims.width,
            dims.height,
            r.sample_count(),
            r.points_inside(),
            r.estimated_area(),
            quoted(r.source_ref().as_str()),
            d = delimiter
        )?;
    }
    Ok(())
}

fn write_json<W: Write>(results: &[EstimationResult], w: &mut W) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *w, results)?;
    writeln!(w)
}

#[inline]
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
