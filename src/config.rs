use std::path::PathBuf;

/// Prompt written before every read
pub const DEFAULT_PROMPT: &str = "> ";

/// Where command lines come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    Script(PathBuf),
}

/// Interpreter session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt text
    pub prompt: String,

    /// Write the prompt before each read
    pub show_prompt: bool,

    /// Command source
    pub input: InputSource,
}

impl ReplConfig {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_prompt: true,
            input: InputSource::Stdin,
        }
    }

    /// Set the prompt text
    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    /// Turn the prompt on or off
    pub fn show_prompt(mut self, show: bool) -> Self {
        self.show_prompt = show;
        self
    }

    /// Read commands from a file instead of standard input
    pub fn script(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = InputSource::Script(path.into());
        self
    }

    /// Prompt to write, or `None` when prompting is off
    pub fn active_prompt(&self) -> Option<&str> {
        self.show_prompt.then_some(self.prompt.as_str())
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self::new()
    }
}
