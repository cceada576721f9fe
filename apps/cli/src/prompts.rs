//! Interactive prompt capabilities.
//!
//! The run flow talks to these traits rather than a terminal directly,
//! so tests can supply scripted answers.

use anyhow::Result;
use dialoguer::{Input, Select};

/// Picks one item from a fixed list; returns the selected index.
pub trait ChoicePrompt {
    fn choose(&self, prompt: &str, items: &[&str]) -> Result<usize>;
}

/// Reads one line of free text.
pub trait TextPrompt {
    fn text(&self, prompt: &str) -> Result<String>;
}

/// Terminal prompts backed by `dialoguer`.
pub struct TerminalPrompt;

impl ChoicePrompt for TerminalPrompt {
    fn choose(&self, prompt: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }
}

impl TextPrompt for TerminalPrompt {
    fn text(&self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }
}
