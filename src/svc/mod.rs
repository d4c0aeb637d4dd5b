use std::fmt;

pub use fifo_log::FifoLog;

mod fifo_log;

/// Append-only destination for gate diagnostics.
pub trait MessageSink {
    fn accept(&self, entry: LogEntry);
}

#[derive(Debug)]
pub struct LogEntry {
    text: String,
    cause: Option<anyhow::Error>,
}

impl LogEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cause: None,
        }
    }

    pub fn with_cause(text: impl Into<String>, cause: anyhow::Error) -> Self {
        Self {
            text: text.into(),
            cause: Some(cause),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.cause.as_ref()
    }

    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} ({})", self.text, cause),
            None => f.write_str(&self.text),
        }
    }
}
