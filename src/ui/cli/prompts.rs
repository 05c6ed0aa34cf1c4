use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ui::cli::drivers::PromptDriver;

/// Checks that `input` names an existing image file with one of
/// `extensions` (case-insensitive) and returns it trimmed.
pub fn check_image_path(input: &str, extensions: &[&str]) -> Result<PathBuf, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter the path of an image".into());
    }
    let p = Path::new(trimmed);

    if !p.exists() {
        return Err(format!("No image found at {}", p.display()));
    }
    if !p.is_file() {
        return Err(format!("{} is a directory, not an image", p.display()));
    }
    let known = p
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)));
    if !known {
        return Err(format!(
            "{} is not a supported image; expected .{}",
            p.display(),
            extensions.join(" / .")
        ));
    }
    Ok(p.to_path_buf())
}

/// Asks for an image path until [`check_image_path`] accepts it, echoing
/// each rejection to `out`.
pub fn prompt_image_path<D: PromptDriver, W: Write>(
    driver: &D,
    out: &mut W,
    title: &str,
    help: &str,
    extensions: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, "")?;
        match check_image_path(&answer, extensions) {
            Ok(path) => return Ok(path),
            Err(msg) => writeln!(out, "✗ {msg}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Answer, ScriptedDriver};
    use tempfile::{Builder, TempDir};

    #[test]
    fn blank_input_asks_for_an_image() {
        assert_eq!(
            check_image_path("   ", &["png"]),
            Err("Enter the path of an image".to_string())
        );
    }

    #[test]
    fn missing_files_and_directories_are_rejected() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.png");
        let err = check_image_path(missing.to_str().unwrap(), &["png"]).unwrap_err();
        assert_eq!(err, format!("No image found at {}", missing.display()));

        let err = check_image_path(dir.path().to_str().unwrap(), &["png"]).unwrap_err();
        assert!(err.ends_with("is a directory, not an image"));
    }

    #[test]
    fn extension_must_be_a_known_image_type() {
        let upper = Builder::new().suffix(".PNG").tempfile().unwrap();
        assert_eq!(
            check_image_path(upper.path().to_str().unwrap(), &["png", "jpg"]),
            Ok(upper.path().to_path_buf())
        );

        let text = Builder::new().suffix(".txt").tempfile().unwrap();
        let err = check_image_path(text.path().to_str().unwrap(), &["png", "jpg"]).unwrap_err();
        assert!(err.ends_with("is not a supported image; expected .png / .jpg"));

        let bare = Builder::new().tempfile().unwrap();
        assert!(check_image_path(bare.path().to_str().unwrap(), &["png"]).is_err());
    }

    #[test]
    fn reprompts_until_an_image_is_given() {
        let file = Builder::new().suffix(".png").tempfile().unwrap();
        let good = file.path().to_str().unwrap().to_string();
        let driver = ScriptedDriver::new([
            Answer::Text("missing.png".into()),
            Answer::Text(format!("  {good}  ")),
        ]);
        let mut out = Vec::new();
        let got = prompt_image_path(&driver, &mut out, "Image", "", &["png"]).unwrap();
        assert_eq!(got, PathBuf::from(&good));
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "✗ No image found at missing.png\n");
        assert!(driver.is_drained());
    }
}
