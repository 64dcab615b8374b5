use crate::config::ReplConfig;
use crate::core::{KvError, Result};
use crate::executor::{ExecutionContext, ExecutorPipeline};
use crate::parser::CommandParser;
use crate::result::CommandResult;
use crate::transaction::TransactionStack;
use std::io::{BufRead, Write};
use tracing::{debug, info, trace};

/// Printed on QUIT
pub const EXIT_MESSAGE: &str = "Exiting...";

/// Whether the read loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session: a transaction stack plus the three streams it
/// talks through.
///
/// Values go to `output`, diagnostics go to `errors`, one line each.
pub struct Session<R, W, E> {
    config: ReplConfig,
    parser: CommandParser,
    pipeline: ExecutorPipeline,
    transactions: TransactionStack,
    input: R,
    output: W,
    errors: E,
}

impl<R, W, E> Session<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(config: ReplConfig, input: R, output: W, errors: E) -> Self {
        Self {
            config,
            parser: CommandParser::new(),
            pipeline: ExecutorPipeline::with_default_executors(),
            transactions: TransactionStack::new(),
            input,
            output,
            errors,
        }
    }

    pub fn transactions(&self) -> &TransactionStack {
        &self.transactions
    }

    pub fn depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Read and execute lines until QUIT.
    ///
    /// End of input and read failures are returned as errors at whatever
    /// depth they happen; open transactions are neither committed nor
    /// aborted.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");

        loop {
            let line = match self.read_line() {
                Ok(line) => line,
                Err(err) => {
                    debug!(depth = self.depth(), error = %err, "input failed, abandoning session");
                    return Err(err);
                }
            };

            if self.execute_line(&line)? == Flow::Quit {
                info!(depth = self.depth(), "session ended by QUIT");
                return Ok(());
            }
        }
    }

    /// Parse and execute one line, reporting non-fatal errors on the error
    /// stream.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        trace!(depth = self.depth(), line, "line received");

        match self.execute(line) {
            Ok(result) => self.emit(&result),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                debug!(depth = self.depth(), error = %err, "command rejected");
                self.report(&err)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(&mut self, line: &str) -> Result<CommandResult> {
        let stmt = self.parser.parse(line)?;
        let mut ctx = ExecutionContext::new(&mut self.transactions);
        self.pipeline.execute(&stmt, &mut ctx)
    }

    fn emit(&mut self, result: &CommandResult) -> Result<Flow> {
        if let CommandResult::Depth(depth) = result {
            debug!(depth = *depth, "transaction depth changed");
        }

        if let Some(text) = result.output() {
            writeln!(self.output, "{}", text).map_err(KvError::Output)?;
        }

        if result.is_quit() {
            writeln!(self.output, "{}", EXIT_MESSAGE).map_err(KvError::Output)?;
            self.output.flush().map_err(KvError::Output)?;
            return Ok(Flow::Quit);
        }

        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &KvError) -> Result<()> {
        writeln!(self.errors, "{}", err).map_err(KvError::Output)
    }

    /// Write the prompt and read one line. Zero bytes read means the input
    /// is exhausted. Bytes that are not valid UTF-8 are replaced rather than
    /// failing the read.
    fn read_line(&mut self) -> Result<String> {
        if let Some(prompt) = self.config.active_prompt() {
            write!(self.output, "{}", prompt).map_err(KvError::Output)?;
            self.output.flush().map_err(KvError::Output)?;
        }

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(KvError::Input)?;
        if read == 0 {
            return Err(KvError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
