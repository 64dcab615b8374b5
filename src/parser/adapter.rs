// ============================================================================
// src/parser/adapter.rs - line -> Statement
// ============================================================================

use crate::core::{KvError, Result};
use crate::parser::ast::{Statement, keywords};

/// Longest accepted line: command, key, value
const MAX_TOKENS: usize = 3;

#[derive(Debug, Default, Clone, Copy)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one input line.
    ///
    /// The line is split on runs of whitespace. The first word is matched
    /// case-insensitively; keys and values are taken verbatim.
    pub fn parse(&self, line: &str) -> Result<Statement> {
        let words: Vec<&str> = line.split_whitespace().collect();

        if words.is_empty() {
            return Err(KvError::MissingCommand);
        }
        if words.len() > MAX_TOKENS {
            return Err(KvError::TooManyArguments);
        }

        let command = words[0].to_uppercase();
        let args = &words[1..];

        let statement = match command.as_str() {
            keywords::READ => match args {
                [key] => Statement::Read { key: key.to_string() },
                _ => return Err(Self::arity(command)),
            },
            keywords::WRITE => match args {
                [key, value] => Statement::Write {
                    key: key.to_string(),
                    value: value.to_string(),
                },
                _ => return Err(Self::arity(command)),
            },
            keywords::DELETE => match args {
                [key] => Statement::Delete { key: key.to_string() },
                _ => return Err(Self::arity(command)),
            },
            keywords::START | keywords::COMMIT | keywords::ABORT | keywords::QUIT => {
                if !args.is_empty() {
                    return Err(Self::arity(command));
                }
                match command.as_str() {
                    keywords::START => Statement::Start,
                    keywords::COMMIT => Statement::Commit,
                    keywords::ABORT => Statement::Abort,
                    _ => Statement::Quit,
                }
            }
            _ => return Err(KvError::UnrecognizedCommand(command)),
        };

        Ok(statement)
    }

    fn arity(command: String) -> KvError {
        KvError::WrongArity { command }
    }
}
