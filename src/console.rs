//! Confirmation pauses between the destructive steps.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Blocks the walkthrough until the user acknowledges a step.
pub trait Confirm {
    /// Prints `prompt` and waits for acknowledgment.
    fn confirm(&mut self, prompt: &str) -> Result<()>;
}

impl<C: Confirm + ?Sized> Confirm for Box<C> {
    fn confirm(&mut self, prompt: &str) -> Result<()> {
        (**self).confirm(prompt)
    }
}

impl<C: Confirm + ?Sized> Confirm for &mut C {
    fn confirm(&mut self, prompt: &str) -> Result<()> {
        (**self).confirm(prompt)
    }
}

/// Waits for one line on stdin. No timeout; blocks for as long as it takes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<()> {
        println!("{prompt}");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// Acknowledges every step immediately, recording the prompts it saw.
/// Used by `--yes` runs and by the tests.
#[derive(Debug, Clone, Default)]
pub struct AutoConfirm {
    /// Prompts in the order they were raised.
    pub prompts: Vec<String>,
}

impl Confirm for AutoConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<()> {
        self.prompts.push(prompt.to_owned());
        Ok(())
    }
}
