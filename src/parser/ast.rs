/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Read { key: String },
    Write { key: String, value: String },
    Delete { key: String },
    Start,
    Commit,
    Abort,
    Quit,
}

impl Statement {
    /// Upper-case command word
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Read { .. } => keywords::READ,
            Statement::Write { .. } => keywords::WRITE,
            Statement::Delete { .. } => keywords::DELETE,
            Statement::Start => keywords::START,
            Statement::Commit => keywords::COMMIT,
            Statement::Abort => keywords::ABORT,
            Statement::Quit => keywords::QUIT,
        }
    }
}

pub mod keywords {
    pub const READ: &str = "READ"; // key
    pub const WRITE: &str = "WRITE"; // key value
    pub const DELETE: &str = "DELETE"; // key

    pub const START: &str = "START";
    pub const COMMIT: &str = "COMMIT";
    pub const ABORT: &str = "ABORT";

    pub const QUIT: &str = "QUIT";
}
