//! Output sink for `print`
//!
//! The interpreter writes through a shared, lockable writer so hosts can
//! redirect program output (tests capture it in memory).

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for printed values
pub type OutputWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writer that forwards to the process's standard output
pub fn stdout_writer() -> OutputWriter {
    Arc::new(Mutex::new(Box::new(std::io::stdout())))
}

/// In-memory writer plus a handle to read back what was written
pub fn capture_writer() -> (OutputWriter, CaptureBuffer) {
    let buffer = CaptureBuffer::default();
    let writer: OutputWriter = Arc::new(Mutex::new(Box::new(buffer.clone())));
    (writer, buffer)
}

/// Shared byte buffer implementing [`Write`]
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        match self.buf.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        let mut buf = self
            .buf
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "capture buffer poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
