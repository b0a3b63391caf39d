//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests generate into temporary directories and inspect the
//! emitted JSON and log output. These helpers keep the test cases concise.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use clap::Parser;
use tempfile::TempDir;
use tracing::Level;

use super::Cli;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Parses `args` as if passed after the binary name, pointing output at `dir`.
pub(super) fn cli_for(dir: &TempDir, args: &[&str]) -> Cli {
    let output_dir = dir.path().to_string_lossy().into_owned();
    let argv = ["strata", "--output-dir", output_dir.as_str()]
        .into_iter()
        .chain(args.iter().copied());
    match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments must parse: {err}"),
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub(super) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(super) fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock poisoned").clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a plain-text subscriber writing into the returned buffer.
pub(super) fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.contents())
}
