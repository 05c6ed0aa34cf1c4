use anyhow::{Result, anyhow};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumMessage, IntoStaticStr};

use crate::ui::cli::drivers::PromptDriver;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessage, IntoStaticStr)]
pub enum MenuAction {
    #[strum(
        message = "Calculate area",
        detailed_message = "Estimate the stained area of a binary image."
    )]
    Calculate,

    #[strum(
        message = "Previous results",
        detailed_message = "Every estimate of this session, newest first."
    )]
    History,

    #[strum(
        message = "Export results",
        detailed_message = "Write the history to a CSV, TSV or JSON file."
    )]
    Export,

    #[strum(message = "Clear results", detailed_message = "Forget every previous estimate.")]
    Clear,

    #[strum(message = "Quit")]
    Quit,
}

/// `(kind, label)` pairs for every variant, label = message plus dimmed
/// detail when one exists.
pub fn labelled<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

pub fn pick<K, D>(driver: &D, title: &str) -> Result<K>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
    D: PromptDriver,
{
    let (kinds, labels): (Vec<K>, Vec<String>) = labelled::<K>().into_iter().unzip();
    let idx = driver.ask_select(title, "↑/↓ to navigate, ↵ to select", &labels)?;
    kinds
        .get(idx)
        .copied()
        .ok_or_else(|| anyhow!("selection {idx} out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryFormat;
    use crate::testing::{Answer, ScriptedDriver};

    #[test]
    fn labels_follow_declaration_order() {
        let items = labelled::<MenuAction>();
        let kinds: Vec<_> = items.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                MenuAction::Calculate,
                MenuAction::History,
                MenuAction::Export,
                MenuAction::Clear,
                MenuAction::Quit
            ]
        );
        assert!(items[0].1.starts_with("Calculate area  "));
        assert!(items[0].1.contains("binary image"));
        assert_eq!(items[4].1, "Quit");
    }

    #[test]
    fn pick_maps_the_selected_index_back() {
        let driver = ScriptedDriver::new([Answer::Select("Export"), Answer::Select("JSON")]);
        assert_eq!(pick::<MenuAction, _>(&driver, "?").unwrap(), MenuAction::Export);
        assert_eq!(
            pick::<HistoryFormat, _>(&driver, "?").unwrap(),
            HistoryFormat::Json
        );
    }
}
