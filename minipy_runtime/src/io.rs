//! Output sink for the `print` operator.
//!
//! Text is written verbatim: no separator, no trailing newline. Writes
//! land in the order they are issued.

use std::cell::RefCell;
use std::io::Write;

use crate::error::RuntimeResult;

/// Where written text goes
#[derive(Debug, Default)]
pub enum Output {
    /// Process standard output
    #[default]
    Stdout,
    /// In-memory buffer for capturing output
    Buffer(RefCell<String>),
}

impl Output {
    /// Create a capturing buffer sink
    pub fn buffer() -> Self {
        Output::Buffer(RefCell::new(String::new()))
    }

    /// Write text to the sink
    pub fn write(&self, text: &str) -> RuntimeResult<()> {
        match self {
            Output::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()?;
            }
            Output::Buffer(buf) => buf.borrow_mut().push_str(text),
        }
        Ok(())
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for stdout, which doesn't capture.
    pub fn contents(&self) -> String {
        match self {
            Output::Stdout => String::new(),
            Output::Buffer(buf) => buf.borrow().clone(),
        }
    }

    /// Clear captured output. No-op for stdout.
    pub fn clear(&self) {
        if let Output::Buffer(buf) = self {
            buf.borrow_mut().clear();
        }
    }
}
