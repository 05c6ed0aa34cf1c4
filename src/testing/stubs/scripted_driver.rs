use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bool(bool),
    Text(String),
    U64(u64),
    /// Picks the option whose label contains this text.
    Select(&'static str),
}

/// [`PromptDriver`] that replays canned answers in order.
///
/// Fails when the script runs dry or when the next answer does not match
/// the kind of prompt being asked.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
        }
    }

    pub fn is_drained(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted at prompt {title:?}"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Bool(b) => Ok(b),
            other => bail!("expected a bool for {title:?}, script has {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            other => bail!("expected text for {title:?}, script has {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        _default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        match self.next(title)? {
            Answer::U64(n) => {
                if min.is_some_and(|lo| n < lo) || max.is_some_and(|hi| n > hi) {
                    bail!("{n} is outside the bounds offered for {title:?}");
                }
                Ok(n)
            }
            other => bail!("expected a number for {title:?}, script has {other:?}"),
        }
    }

    fn ask_select(&self, title: &str, _help: &str, options: &[String]) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(label) => options
                .iter()
                .position(|o| o.contains(label))
                .ok_or_else(|| anyhow!("no option matching {label:?} in {options:?}")),
            other => bail!("expected a selection for {title:?}, script has {other:?}"),
        }
    }
}
