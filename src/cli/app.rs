use anyhow::{Context, Result};
use rustmemkv::config::{InputSource, ReplConfig};
use rustmemkv::facade::Session;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;
use tracing::info;

pub struct App {
    config: ReplConfig,
}

impl App {
    pub fn new(config: ReplConfig) -> Self {
        Self { config }
    }

    /// Run the session on the process streams.
    ///
    /// QUIT maps to a success exit code. End of input or a read failure is
    /// reported on stderr and maps to failure, leaving any open transaction
    /// uncommitted.
    pub fn run(self) -> Result<ExitCode> {
        let input = self.open_input()?;
        let stdout = io::stdout().lock();
        let stderr = io::stderr();

        let mut session = Session::new(self.config, input, stdout, stderr);

        match session.run() {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(err) => {
                eprintln!("{}", err);
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match &self.config.input {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::Script(path) => {
                info!(path = %path.display(), "reading commands from script");
                let file = File::open(path)
                    .with_context(|| format!("Failed to open script '{}'", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
