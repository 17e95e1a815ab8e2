use std::sync::Arc;

use genz_io::{ClipboardSink, ShareSink};
use genz_source::{TermSource, load_with_status};
use genz_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::context::EventContext;
use crate::events::event_loop;
use crate::io::{spawn_stdin_reader, watcher_io};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64), // typed lines
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        source: Box<dyn TermSource>,
        clipboard: Arc<dyn ClipboardSink>,
        share: Arc<dyn ShareSink>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Loader, runs once
        tasks.spawn(load_terms(
            self.state.clone(),
            source,
            self.channels.ui_to_app.0.clone(),
        ));

        // Event loop
        let ctx = EventContext::new(
            self.state.clone(),
            self.channels.app_to_ui.0.clone(),
            clipboard,
            share,
        );
        tasks.spawn(event_loop(ctx, self.channels.ui_to_app.1.clone()));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
            std::io::stdout(),
        ));

        // Watcher IO
        tasks.spawn(watcher_io(
            spawn_stdin_reader(),
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

/// Fetch the term list, publish it, then tell the event loop
pub async fn load_terms(
    state: Arc<AppState>,
    source: Box<dyn TermSource>,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (store, status) = load_with_status(source.as_ref()).await;

    *state.store.write().await = store;
    *state.status.load.write().await = status.clone();

    event_tx.send(AppEvent::StoreLoaded(status)).await?;
    Ok(())
}
