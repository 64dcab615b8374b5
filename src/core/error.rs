use std::io;
use thiserror::Error;

/// Usage banner embedded in the malformed-command diagnostics.
pub const USAGE: &str = "

    Available commands:
    -------------------
    READ <key>           Print value of <key>
    WRITE <key> <value>  Store <value> in <key>
    DELETE <key>         Delete <key>

    START                Start a transaction
    COMMIT               Commit transaction
    ABORT                Abort transaction

    QUIT                 Exit program
    ";

#[derive(Error, Debug)]
pub enum KvError {
    #[error("Error: expected at least one command: {}", USAGE)]
    MissingCommand,

    #[error("Error: too many arguments: {}", USAGE)]
    TooManyArguments,

    #[error("Error: wrong number of arguments for {}: {}", .command, USAGE)]
    WrongArity { command: String },

    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Error: you are not currently in a transaction")]
    NoActiveTransaction,

    #[error("Error reading standard input: end of input")]
    EndOfInput,

    #[error("Error reading standard input: {0}")]
    Input(#[source] io::Error),

    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),
}

impl KvError {
    /// Fatal errors end the session; everything else is reported and the loop continues.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            KvError::EndOfInput | KvError::Input(_) | KvError::Output(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, KvError>;
