//! Console logging
//!
//! A `tracing-subscriber` fmt layer whose writer forwards each formatted event
//! to the matching `console` method (`error`, `warn`, `log`, `debug`). Off the
//! web the lines go to stderr.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Builds one [`ConsoleWriter`] per event
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

/// Buffers one formatted event and emits it when dropped
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The buffered line without its trailing newline
    pub fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        emit(self.level, &self.line());
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// `DEBUG` in debug builds, `INFO` otherwise
pub fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the console subscriber
///
/// Returns `false` if a global subscriber was already set.
pub fn init(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::log_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_buffers_until_dropped() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, "theme preference ").unwrap();
        writeln!(writer, "not saved").unwrap();

        assert_eq!(writer.level(), Level::WARN);
        assert_eq!(writer.line(), "theme preference not saved");
    }

    #[test]
    fn test_default_writer_is_info() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level(), Level::INFO);
        assert!(writer.line().is_empty());
    }
}
