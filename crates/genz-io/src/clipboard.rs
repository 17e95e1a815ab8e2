use std::sync::Mutex;

use arboard::Clipboard;
use genz_core::clipboard_text;
use genz_types::TermRecord;

use crate::SinkError;

pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), SinkError>;
}

/// OS clipboard. One handle is opened on first use and kept, since on
/// X11/Wayland the copied text goes away with the handle that owns it.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<Clipboard>>,
    wait: bool,
}

impl SystemClipboard {
    /// For long-running processes that keep the sink alive
    pub fn new() -> Self {
        Self::default()
    }

    /// For a process that exits right after copying. On Linux `set_text`
    /// blocks until another program takes over the clipboard.
    pub fn one_shot() -> Self {
        Self {
            handle: Mutex::new(None),
            wait: true,
        }
    }

    pub fn waits_for_handover(&self) -> bool {
        self.wait && cfg!(target_os = "linux")
    }

    pub fn holds_handle(&self) -> bool {
        self.handle.lock().map(|h| h.is_some()).unwrap_or(false)
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), SinkError> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|_| SinkError::Unavailable("clipboard handle poisoned".to_string()))?;

        if handle.is_none() {
            *handle = Some(Clipboard::new()?);
        }
        let Some(clipboard) = handle.as_mut() else {
            return Err(SinkError::Unavailable("no clipboard handle".to_string()));
        };

        #[cfg(target_os = "linux")]
        if self.wait {
            use arboard::SetExtLinux;

            tracing::info!("Holding the clipboard until another program takes it");
            clipboard.set().wait().text(text.to_owned())?;
            return Ok(());
        }

        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Keeps every copied text, newest last
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    history: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.history.lock().ok()?.last().cloned()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), SinkError> {
        self.history
            .lock()
            .map_err(|_| SinkError::Unavailable("clipboard history poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

/// Copy `"{term}: {definition}"`. Failures are logged, never returned.
pub fn copy_entry(sink: &dyn ClipboardSink, record: &TermRecord) -> bool {
    match sink.set_text(&clipboard_text(record)) {
        Ok(()) => {
            tracing::info!("Copied '{}' to clipboard", record.term);
            true
        }
        Err(e) => {
            tracing::error!("Failed to copy '{}': {}", record.term, e);
            false
        }
    }
}
