//! Interactive decision surfaces.
//!
//! Prompts go to stderr so stdout stays clean for redirection. An empty
//! line is the explicit decline signal; anything unparsable or out of
//! range re-prompts rather than silently skipping the row.

use std::io::{self, BufRead, Write};

use csvlink_core::DecisionSurface;

/// Reads selections from stdin, one ambiguous row at a time.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl DecisionSurface for StdinPrompt {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        eprintln!();
        eprintln!("{prompt}");
        for (index, option) in options.iter().enumerate() {
            eprintln!("  {}. {option}", index + 1);
        }
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            eprint!("Choice [1-{}], empty to skip: ", options.len());
            io::stderr().flush().ok();
            line.clear();
            match stdin.lock().read_line(&mut line) {
                // EOF: treat as decline, same as an empty line.
                Ok(0) => return None,
                Ok(_) => {}
                Err(_) => return None,
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Some(choice - 1),
                _ => eprintln!(
                    "Enter a number between 1 and {}, or press Enter to skip.",
                    options.len()
                ),
            }
        }
    }
}

/// Declines every prompt; used for scripted, non-interactive runs where an
/// ambiguous row should simply stay unmatched.
#[derive(Debug, Default)]
pub struct DeclineAll;

impl DecisionSurface for DeclineAll {
    fn choose(&mut self, _prompt: &str, _options: &[String]) -> Option<usize> {
        None
    }
}
