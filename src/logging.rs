use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Records call outcomes to an injected sink without changing call sites'
/// results. The sink is configuration: stderr, an append-mode file, or any
/// other `Write` (a `Vec<u8>` in tests).
pub struct CallLog<W: Write> {
    sink: W,
}

impl CallLog<io::Stderr> {
    pub fn stderr() -> Self {
        CallLog { sink: io::stderr() }
    }
}

impl CallLog<File> {
    pub fn to_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let sink = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(CallLog { sink })
    }
}

impl<W: Write> CallLog<W> {
    pub fn new(sink: W) -> Self {
        CallLog { sink }
    }

    /// Runs `call` and writes `"{name} ok"` or `"{name} error: {err}"` to the
    /// sink. The result is returned unchanged either way; a failing sink
    /// never turns a success into an error.
    pub fn observe<T, E, F>(&mut self, name: &str, call: F) -> Result<T, E>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        log::debug!("{name} called");

        match call() {
            Ok(value) => {
                let _ = writeln!(self.sink, "{name} ok");
                Ok(value)
            }
            Err(err) => {
                let _ = writeln!(self.sink, "{name} error: {err}");
                Err(err)
            }
        }
    }

    /// Consumes the logger and hands the sink back, mostly for tests.
    pub fn into_sink(self) -> W {
        self.sink
    }
}
