use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stderr and read the answer from `input`.
pub fn confirm_with<R: BufRead>(prompt: &str, input: &mut R) -> bool {
    warning(prompt);
    eprint!("Confirm [y/N]: ");
    let _ = io::stderr().flush();

    let mut s = String::new();
    if input.read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Ask a yes/no confirmation from the user on the terminal.
pub fn confirm(prompt: &str) -> bool {
    confirm_with(prompt, &mut io::stdin().lock())
}
