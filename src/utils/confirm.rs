use anyhow::{Context, Result};
use console::{style, Term};

use crate::error::Error;

/// Asks on stderr before a destructive call. `force` skips the prompt.
pub fn confirm(prompt: &str, force: bool) -> Result<()> {
    if force {
        log::debug!("Skipping confirmation: {prompt}");

        return Ok(());
    }

    let answer = dialoguer::Input::<String>::new()
        .with_prompt(format!(
            "{} {prompt} [y/N]",
            style("warning:").yellow().bold()
        ))
        .allow_empty(true)
        .interact_text_on(&Term::stderr())
        .context("Failed to read confirmation")?;

    if is_confirmed(&answer) {
        Ok(())
    } else {
        Err(Error::Declined.into())
    }
}

/// Only `y` and `yes` confirm, anything else (including no answer) aborts.
pub fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_accepts_yes() {
        assert!(is_confirmed("y"));
        assert!(is_confirmed("YES"));
        assert!(is_confirmed("  Yes  "));
    }

    #[test]
    fn test_anything_else_declines() {
        for answer in ["n", "no", "", "   ", "yess", "sure"] {
            assert!(!is_confirmed(answer), "`{answer}` should decline");
        }
    }

    #[test]
    fn test_force_skips_the_prompt() {
        // the terminal is never read when forced
        assert!(confirm("Delete server?", true).is_ok());
    }
}
