use std::io::Write;
use std::sync::Mutex;

use genz_core::share_message;
use genz_types::{ShareMessage, TermRecord};

use crate::SinkError;

pub trait ShareSink: Send + Sync {
    fn share(&self, message: &ShareMessage) -> Result<(), SinkError>;
}

/// Terminal stand-in for the platform share sheet
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutShare;

impl ShareSink for StdoutShare {
    fn share(&self, message: &ShareMessage) -> Result<(), SinkError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", message.title)?;
        writeln!(out, "{}", message.message)?;
        out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryShare {
    shared: Mutex<Vec<ShareMessage>>,
}

impl MemoryShare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<ShareMessage> {
        self.shared.lock().ok()?.last().cloned()
    }
}

impl ShareSink for MemoryShare {
    fn share(&self, message: &ShareMessage) -> Result<(), SinkError> {
        self.shared
            .lock()
            .map_err(|_| SinkError::Unavailable("share history poisoned".to_string()))?
            .push(message.clone());
        Ok(())
    }
}

/// Share a record. Failures are only logged.
pub fn share_entry(sink: &dyn ShareSink, record: &TermRecord) -> bool {
    match sink.share(&share_message(record)) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Share of '{}' failed: {}", record.term, e);
            false
        }
    }
}
