pub mod environment;
pub mod output;
pub mod user_input;

pub use environment::{EnvironmentSource, MockEnvironment, ProcessEnvironment};
pub use output::{MockOutput, Output, OutputMessage, TerminalOutput};
pub use user_input::{InquireUserInput, MockUserInput, StdinUserInput, UserInput, default_user_input};
