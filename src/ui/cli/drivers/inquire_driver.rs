use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let q = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| {
                let below = min.is_some_and(|lo| *x < lo);
                let above = max.is_some_and(|hi| *x > hi);
                if !below && !above {
                    return Ok(Validation::Valid);
                }
                let msg = match (min, max) {
                    (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
                    (Some(lo), None) => format!("Must be ≥ {lo}"),
                    (None, Some(hi)) => format!("Must be ≤ {hi}"),
                    (None, None) => unreachable!(),
                };
                Ok(Validation::Invalid(msg.into()))
            });

        Ok(q.prompt()?)
    }

    fn ask_select(&self, title: &str, help: &str, options: &[String]) -> Result<usize> {
        let picked = Select::new(title, options.to_vec())
            .with_help_message(help)
            .raw_prompt()?;
        Ok(picked.index)
    }
}
