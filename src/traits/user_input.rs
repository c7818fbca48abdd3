use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::Mutex;

/// Trait for reading raw answers so prompting can be driven by mocks in tests
pub trait UserInput: Send + Sync {
    /// Display `prompt` and read a single line of input.
    ///
    /// The returned text may still carry its line terminator.
    fn read_line(&self, prompt: &str) -> Result<String>;
}

/// Interactive terminal input using the inquire crate
pub struct InquireUserInput;

impl UserInput for InquireUserInput {
    fn read_line(&self, prompt: &str) -> Result<String> {
        use inquire::Text;
        let answer = Text::new(prompt).prompt()?;
        Ok(answer)
    }
}

/// Plain line input from stdin, used when stdin is not a terminal
pub struct StdinUserInput;

impl UserInput for StdinUserInput {
    fn read_line(&self, prompt: &str) -> Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt).context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if read == 0 {
            anyhow::bail!("Input stream closed before an answer was given");
        }

        Ok(line)
    }
}

/// Pick the input implementation that suits the current stdin
pub fn default_user_input() -> Box<dyn UserInput> {
    use std::io::IsTerminal;
    if std::io::stdin().is_terminal() {
        Box::new(InquireUserInput)
    } else {
        Box::new(StdinUserInput)
    }
}

/// Mock user input implementation for testing
pub struct MockUserInput {
    responses: Mutex<VecDeque<String>>,
    repeat: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockUserInput {
    /// Create new mock with no pre-configured responses
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            repeat: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create mock with pre-configured responses, answered in order
    pub fn with_responses(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            repeat: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create mock that gives the same answer to every prompt
    pub fn always(answer: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            repeat: Some(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Add a response to the queue
    pub fn add_response(&self, response: &str) {
        self.responses.lock().unwrap().push_back(response.to_string());
    }

    /// Prompts shown so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<String> {
        if let Some(answer) = self.responses.lock().unwrap().pop_front() {
            return Ok(answer);
        }
        self.repeat
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No more mock responses available"))
    }
}

impl Default for MockUserInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for MockUserInput {
    fn read_line(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.next_response()
    }
}
