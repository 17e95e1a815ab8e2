use genz_types::{AppEvent, UiEvent};
use kanal::AsyncReceiver;

use crate::context::EventContext;

pub mod query;
pub mod share;

use query::{handle_query, handle_store_loaded};
use share::{handle_copy, handle_share};

/// App's main loop. Returns once the input side asks to close.
pub async fn event_loop(
    ctx: EventContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    let status = ctx.state.status.load.read().await.clone();
    ctx.ui_tx.send(AppEvent::StatusUpdate(status)).await?;

    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if !handle_events(&ctx, event).await? {
            break;
        }
    }

    tracing::debug!("[EVENT_LOOP] Stopped");
    Ok(())
}

/// Returns false when the loop should stop
async fn handle_events(ctx: &EventContext, event: AppEvent) -> anyhow::Result<bool> {
    match event {
        AppEvent::QueryChanged(query) => {
            handle_query(ctx, query).await?;
        }
        AppEvent::CopyEntry(index) => {
            handle_copy(ctx, index).await?;
        }
        AppEvent::ShareEntry(index) => {
            handle_share(ctx, index).await?;
        }
        AppEvent::StoreLoaded(status) => {
            handle_store_loaded(ctx, status).await?;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            ctx.ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(false);
        }
        AppEvent::UiEvent(event) => {
            ctx.ui_tx.send(AppEvent::UiEvent(event)).await?;
        }
        AppEvent::ShowResults(_) | AppEvent::StatusUpdate(_) | AppEvent::Notice(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(true)
}
