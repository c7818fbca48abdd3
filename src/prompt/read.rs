use super::error::PromptError;
use crate::traits::UserInput;
use log::debug;

/// Ask for a free-text answer, falling back to `default` on an empty line.
///
/// Non-empty answers are returned verbatim apart from the line terminator.
pub fn read_response(input: &dyn UserInput, prompt: &str, default: &str) -> Result<String, PromptError> {
    let text = format!("{} [{}]: ", prompt, default);
    let line = input
        .read_line(&text)
        .map_err(|e| PromptError::input(prompt, e))?;

    let answer = strip_line_terminator(&line);
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Ask the user to pick one of `options` by number or by name.
///
/// An empty line picks the first option; anything unrecognised asks again.
pub fn read_choice(input: &dyn UserInput, prompt: &str, options: &[String]) -> Result<String, PromptError> {
    let Some(first) = options.first() else {
        return Err(PromptError::InvalidArgument(format!(
            "no options to choose from for '{}'",
            prompt
        )));
    };

    let listing = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{} - {}", i + 1, option))
        .collect::<Vec<_>>()
        .join("\n");
    let numbers = (1..=options.len())
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let question = format!("Select {}:\n{}\nChoose from {} [1]: ", prompt, listing, numbers);

    let mut text = question.clone();
    loop {
        let line = input
            .read_line(&text)
            .map_err(|e| PromptError::input(prompt, e))?;
        let answer = strip_line_terminator(&line).trim();

        if answer.is_empty() {
            return Ok(first.clone());
        }

        let by_index = answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=options.len()).contains(n))
            .map(|n| &options[n - 1]);
        if let Some(option) = by_index.or_else(|| options.iter().find(|o| o.as_str() == answer)) {
            return Ok(option.clone());
        }

        debug!("Rejected choice '{}' for '{}'", answer, prompt);
        text = format!("Please choose one of {}.\n{}", numbers, question);
    }
}

/// Drop one trailing `\n` or `\r\n`
pub(crate) fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
