//! Browser console sink for the fmt layer.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Makes one [`ConsoleLine`] per event.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrowserConsole;

/// Buffers one formatted event and hands it to the console when dropped.
#[derive(Debug)]
pub(crate) struct ConsoleLine {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleLine {
    const fn new(level: Level) -> Self {
        Self { level, buffer: Vec::new() }
    }
}

impl Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line.into()),
            Level::WARN => web_sys::console::warn_1(&line.into()),
            Level::INFO => web_sys::console::info_1(&line.into()),
            Level::DEBUG => web_sys::console::log_1(&line.into()),
            _ => web_sys::console::debug_1(&line.into()),
        }
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for BrowserConsole {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}
