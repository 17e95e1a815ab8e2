use genz_io::{copy_entry, share_entry};
use genz_types::{AppEvent, TermRecord};

use crate::context::EventContext;

pub const COPIED: &str = "Đã copy vào clipboard nè! ✨";

async fn selected(ctx: &EventContext, index: usize) -> Option<TermRecord> {
    ctx.state.status.results.read().await.get(index).cloned()
}

pub async fn handle_copy(ctx: &EventContext, index: usize) -> anyhow::Result<()> {
    let Some(record) = selected(ctx, index).await else {
        return notify_missing(ctx, index).await;
    };

    if copy_entry(ctx.clipboard.as_ref(), &record) {
        ctx.ui_tx.send(AppEvent::Notice(COPIED.to_string())).await?;
    } else {
        ctx.ui_tx
            .send(AppEvent::Notice("Copy không được, thử lại sau nha.".to_string()))
            .await?;
    }

    Ok(())
}

pub async fn handle_share(ctx: &EventContext, index: usize) -> anyhow::Result<()> {
    let Some(record) = selected(ctx, index).await else {
        return notify_missing(ctx, index).await;
    };

    // Failures are logged by the sink helper only
    share_entry(ctx.share.as_ref(), &record);

    Ok(())
}

async fn notify_missing(ctx: &EventContext, index: usize) -> anyhow::Result<()> {
    tracing::warn!("No result at index {}", index);
    ctx.ui_tx
        .send(AppEvent::Notice(format!("Không có mục số {}", index + 1)))
        .await?;
    Ok(())
}
