use anyhow::Result;
use chrono::Local;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::estimation::{AreaEstimator, EstimationRequest, EstimationResult};
use crate::history::{HistoryFormat, ResultStore};
use crate::imaging::{SUPPORTED_EXTENSIONS, StainImage};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::prompts::prompt_image_path;
use crate::ui::cli::session::menu::{MenuAction, pick};
use crate::ui::cli::session::table::{format_area, group_thousands, render_history};

/// Interactive loop over the estimation menu.
///
/// Results go into the borrowed store; nothing else outlives the session.
/// Recoverable problems (undecodable image, rejected request, failed
/// export) are reported on `out` and the loop carries on.
pub struct Session<'a, D, E, W> {
    driver: &'a D,
    estimator: E,
    store: &'a ResultStore,
    config: SessionConfig,
    out: W,
}

impl<'a, D, E, W> Session<'a, D, E, W>
where
    D: PromptDriver,
    E: AreaEstimator,
    W: Write,
{
    pub fn new(
        driver: &'a D,
        estimator: E,
        store: &'a ResultStore,
        config: SessionConfig,
        out: W,
    ) -> Self {
        Self {
            driver,
            estimator,
            store,
            config,
            out,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            match pick::<MenuAction, _>(self.driver, "What next?")? {
                MenuAction::Calculate => {
                    self.calculate()?;
                }
                MenuAction::History => self.show_history()?,
                MenuAction::Export => self.export()?,
                MenuAction::Clear => self.clear()?,
                MenuAction::Quit => break,
            }
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Prompts for an image and a point count, estimates, and records the
    /// result. Returns `None` when nothing was recorded.
    pub fn calculate(&mut self) -> Result<Option<EstimationResult>> {
        let path = prompt_image_path(
            self.driver,
            &mut self.out,
            "Binary image:",
            "Path to a black/white image; white pixels are the stain",
            SUPPORTED_EXTENSIONS,
        )?;

        let help = format!(
            "Between {} and {}, in steps of {}",
            self.config.min_sample_count, self.config.max_sample_count, self.config.sample_step
        );
        let requested = self.driver.ask_u64(
            "Points:",
            &help,
            self.config.sample_count,
            Some(self.config.min_sample_count),
            Some(self.config.max_sample_count),
        )?;
        let sample_count = self.config.snap_sample_count(requested);

        let image = match StainImage::open(&path) {
            Ok(image) => image,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not decode image");
                writeln!(self.out, "✗ Could not decode {}: {e}", path.display())?;
                return Ok(None);
            }
        };

        let request = EstimationRequest::new(&image, sample_count).with_source(path.as_path());
        let result = match self.estimator.estimate(&request) {
            Ok(result) => result,
            Err(e) if e.is_invalid_argument() => {
                writeln!(self.out, "✗ Estimation rejected: {e}")?;
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "estimation failed");
                writeln!(self.out, "✗ Estimation failed: {e}")?;
                return Ok(None);
            }
        };

        info!(%result, "estimation complete");
        writeln!(
            self.out,
            "Points inside: {} / {}",
            result.points_inside(),
            result.sample_count()
        )?;
        writeln!(
            self.out,
            "Estimated area: {} (exact: {} px²)",
            format_area(result.estimated_area()),
            group_thousands(image.stained_pixel_count())
        )?;

        self.store.append(result.clone());
        Ok(Some(result))
    }

    pub fn show_history(&mut self) -> Result<()> {
        let table = render_history(&self.store.list(), &Local);
        write!(self.out, "{table}")?;
        Ok(())
    }

    pub fn export(&mut self) -> Result<()> {
        let fmt = pick::<HistoryFormat, _>(self.driver, "Export format:")?;
        let default = format!("stain-history.{}", fmt.extension());
        let answer = self
            .driver
            .ask_string("Export to:", "Destination file", &default)?;
        let trimmed = answer.trim();
        let path = PathBuf::from(if trimmed.is_empty() { default.as_str() } else { trimmed });

        let count = self.store.len();
        match self.store.export(&path, fmt) {
            Ok(()) => {
                info!(path = %path.display(), format = %fmt, count, "exported history");
                writeln!(self.out, "Exported {count} results to {}", path.display())?;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "export failed");
                writeln!(self.out, "✗ Export to {} failed: {e}", path.display())?;
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        if self
            .driver
            .ask_bool("Clear all previous results?", "This cannot be undone", false)?
        {
            self.store.clear();
            writeln!(self.out, "History cleared.")?;
        }
        Ok(())
    }
}
