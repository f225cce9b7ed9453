//! Interactive question loop
//!
//! Kept separate from the query pipeline so the pipeline stays testable
//! without simulating terminal input.

use std::io::{self, BufRead, Write};

use crate::engine::QueryEngine;
use crate::error::Result;

const PROMPT: &str = "Enter your question (q to quit): ";
const SEPARATOR_WIDTH: usize = 40;

/// True when the input (trimmed, case-insensitive) is the quit sentinel
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("q")
}

/// Prompt for questions until the quit sentinel or end of input
///
/// Each query runs start to finish before the next line is read. A failing
/// query ends the loop with the error.
pub async fn run_interactive(engine: &QueryEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}\n", "-".repeat(SEPARATOR_WIDTH));
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // stdin closed
        };
        let query_text = line?;

        if is_quit(&query_text) {
            break;
        }

        let response = engine.answer_query(&query_text).await?;
        println!("{}", response);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_sentinel() {
        assert!(is_quit("q"));
        assert!(is_quit("Q"));
        assert!(is_quit("  q  "));
        assert!(is_quit("\tQ\n"));
    }

    #[test]
    fn test_non_sentinel_input_keeps_looping() {
        assert!(!is_quit(""));
        assert!(!is_quit("quit"));
        assert!(!is_quit("qq"));
        assert!(!is_quit("how do I win?"));
    }
}
