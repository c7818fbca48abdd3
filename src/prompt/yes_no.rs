use super::error::PromptError;
use super::read::strip_line_terminator;
use crate::traits::UserInput;
use log::debug;

const RETRY_HINT: &str = "Please respond with 'yes' or 'no' (or 'y' or 'n').";

/// Ask a yes/no question.
///
/// `default` must be `"yes"`, `"no"` or `None`; anything else fails before
/// reading. With no default an empty answer asks again, and unrecognised
/// answers always ask again.
pub fn query_yes_no(input: &dyn UserInput, question: &str, default: Option<&str>) -> Result<bool, PromptError> {
    let (suffix, fallback) = match default {
        None => ("[y/n]", None),
        Some("yes") => ("[Y/n]", Some(true)),
        Some("no") => ("[y/N]", Some(false)),
        Some(other) => {
            return Err(PromptError::InvalidArgument(format!(
                "invalid default answer: '{}'",
                other
            )));
        }
    };

    let question_text = format!("{} {} ", question, suffix);
    let mut text = question_text.clone();
    loop {
        let line = input
            .read_line(&text)
            .map_err(|e| PromptError::input(question, e))?;
        let answer = strip_line_terminator(&line).trim().to_lowercase();

        if answer.is_empty() {
            if let Some(value) = fallback {
                return Ok(value);
            }
            text = question_text.clone();
            continue;
        }

        if let Some(value) = parse_answer(&answer) {
            return Ok(value);
        }

        debug!("Rejected answer '{}' to '{}'", answer, question);
        text = format!("{}\n{}", RETRY_HINT, question_text);
    }
}

fn parse_answer(answer: &str) -> Option<bool> {
    match answer {
        "yes" | "ye" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
