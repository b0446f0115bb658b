//! Log file writer for the file tracing layer.
//!
//! The terminal layer writes straight to stderr. The file layer goes
//! through [`LogFileMakeWriter`], which appends whole events under a lock
//! so lines from different threads never interleave. Construct the layer
//! with `.with_ansi(false)`.

use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

/// [`MakeWriter`](tracing_subscriber::fmt::MakeWriter) for the file layer.
#[derive(Clone)]
pub struct LogFileMakeWriter {
    file: Arc<Mutex<File>>,
}

impl LogFileMakeWriter {
    pub fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogFileMakeWriter {
    type Writer = LogFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter {
            file: Arc::clone(&self.file),
            buf: Vec::with_capacity(256),
        }
    }
}

/// Per-event writer. Buffers one formatted event and appends it on [`Drop`].
pub struct LogFileWriter {
    file: Arc<Mutex<File>>,
    buf: Vec<u8>,
}

impl Write for LogFileWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LogFileWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let mut file = self.file.lock();
        // Logging must never take the launcher down.
        let _ = file.write_all(&self.buf);
        let _ = file.flush();
    }
}
