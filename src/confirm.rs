//! Interactive confirmation capability
//!
//! Overwrite prompts are injected into the interpreter through this trait
//! so the command handlers stay testable without a real terminal.

use std::io::{self, Write};

/// A synchronous yes/no question put to the user.
pub trait ConfirmSource {
    /// Present `prompt` and return true only on an affirmative answer.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Prompts on stdout and reads the answer from stdin. Anything other than
/// a case-insensitive `y` counts as a refusal.
pub struct StdinConfirm;

impl ConfirmSource for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("y")
    }
}
