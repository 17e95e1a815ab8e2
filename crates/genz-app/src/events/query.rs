use genz_types::{AppEvent, LoadStatus};

use crate::context::EventContext;

pub async fn handle_query(ctx: &EventContext, query: String) -> anyhow::Result<()> {
    *ctx.state.status.query.write().await = query.clone();

    let status = ctx.state.status.load.read().await.clone();
    if status.is_loading() {
        tracing::debug!("Store still loading, holding query '{}'", query);
        ctx.ui_tx.send(AppEvent::StatusUpdate(status)).await?;
        return Ok(());
    }

    let store = ctx.state.snapshot().await;
    let results = genz_lang_vietnamese::search_cards(store.records(), &query);
    tracing::debug!("Query '{}': {} results", query, results.count());

    *ctx.state.status.results.write().await = results.clone();
    ctx.ui_tx.send(AppEvent::ShowResults(results)).await?;

    Ok(())
}

/// Store finished loading: report it and refresh the current query
pub async fn handle_store_loaded(ctx: &EventContext, status: LoadStatus) -> anyhow::Result<()> {
    ctx.ui_tx.send(AppEvent::StatusUpdate(status)).await?;

    let query = ctx.state.status.query.read().await.clone();
    handle_query(ctx, query).await
}
