use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output;
use crate::errors::SelectionError;
use crate::selector::GroupedSelector;

const CANCEL_KEYWORD: &str = "cancel";

/// Outcome of an interactive number prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Selected(usize),
    Cancelled,
}

/// Prompts for a listing number until the entry resolves or the user types
/// the cancel keyword. Non-numeric and out-of-range entries warn and
/// re-prompt.
pub fn pick_number<I>(selector: &GroupedSelector<I>) -> Result<PromptOutcome, dialoguer::Error> {
    let total = selector.total_items();
    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Enter a number (1-{total}) or '{CANCEL_KEYWORD}'"))
            .interact_text()?;

        match read_choice(selector, &raw) {
            Ok(outcome) => return Ok(outcome),
            Err(message) => output::warning(message),
        }
    }
}

/// Interprets one line of user input against the selector's current
/// numbering. Returns a human-readable complaint for entries that should
/// re-prompt.
fn read_choice<I>(selector: &GroupedSelector<I>, raw: &str) -> Result<PromptOutcome, String> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(CANCEL_KEYWORD) {
        return Ok(PromptOutcome::Cancelled);
    }

    let number = trimmed
        .parse::<usize>()
        .map_err(|_| format!("'{trimmed}' is not a number"))?;

    match selector.resolve(number) {
        Ok(_) => Ok(PromptOutcome::Selected(number)),
        Err(err @ SelectionError::OutOfRange { .. }) => Err(err.to_string()),
    }
}
