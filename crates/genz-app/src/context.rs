use std::sync::Arc;

use genz_io::{ClipboardSink, ShareSink};
use genz_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

/// Shared dependencies of the event handlers
#[derive(Clone)]
pub struct EventContext {
    pub state: Arc<AppState>,
    /// Towards the terminal renderer
    pub ui_tx: AsyncSender<AppEvent>,
    pub clipboard: Arc<dyn ClipboardSink>,
    pub share: Arc<dyn ShareSink>,
}

impl EventContext {
    pub fn new(
        state: Arc<AppState>,
        ui_tx: AsyncSender<AppEvent>,
        clipboard: Arc<dyn ClipboardSink>,
        share: Arc<dyn ShareSink>,
    ) -> Self {
        Self {
            state,
            ui_tx,
            clipboard,
            share,
        }
    }
}
