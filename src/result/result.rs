/// What a successfully executed command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Nothing to print
    Empty,
    /// A value to print on its own line
    Value(String),
    /// Transaction depth after START/COMMIT/ABORT
    Depth(usize),
    /// End the session
    Quit,
}

impl CommandResult {
    pub fn is_quit(&self) -> bool {
        matches!(self, CommandResult::Quit)
    }

    /// Text for standard output, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            CommandResult::Value(value) => Some(value),
            _ => None,
        }
    }
}
