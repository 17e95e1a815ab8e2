pub mod clipboard;
pub mod share;

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard, copy_entry};
pub use share::{MemoryShare, ShareSink, StdoutShare, share_entry};

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}
