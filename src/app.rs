use crate::traits::{
    EnvironmentSource, MockEnvironment, MockOutput, MockUserInput, Output, ProcessEnvironment,
    TerminalOutput, UserInput, default_user_input,
};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct AppContext {
    pub input: Arc<dyn UserInput>,
    pub env: Arc<dyn EnvironmentSource>,
    pub output: Arc<dyn Output>,
}

impl AppContext {
    /// Create a new context with real implementations (for production use)
    pub fn new() -> Self {
        Self {
            input: Arc::from(default_user_input()),
            env: Arc::new(ProcessEnvironment),
            output: Arc::new(TerminalOutput),
        }
    }

    /// Create a new context with mock implementations (for testing)
    pub fn test() -> Self {
        Self {
            input: Arc::new(MockUserInput::new()),
            env: Arc::new(MockEnvironment::new()),
            output: Arc::new(MockOutput::new()),
        }
    }

    /// Create a test context with specific mock implementations
    pub fn test_with(
        input: Arc<dyn UserInput>,
        env: Arc<dyn EnvironmentSource>,
        output: Arc<dyn Output>,
    ) -> Self {
        Self { input, env, output }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AppContext {
    fn clone(&self) -> Self {
        Self {
            input: Arc::clone(&self.input),
            env: Arc::clone(&self.env),
            output: Arc::clone(&self.output),
        }
    }
}
