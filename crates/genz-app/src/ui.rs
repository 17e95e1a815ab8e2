use std::io::Write;
use std::sync::Arc;

use genz_config::Config;
use genz_types::{AppEvent, UiEvent};
use kanal::AsyncReceiver;
use tokio::sync::RwLock;

use crate::render::{HELP, Renderer};

/// Terminal side: prints whatever the event loop sends until it is closed
pub async fn ui_loop<W>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    mut out: W,
) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let (renderer, prompt) = {
        let config = config.read().await;
        let color = config.ui.color.enabled(atty::is(atty::Stream::Stdout));
        (
            Renderer::new(color, config.ui.show_tags),
            config.ui.prompt.clone(),
        )
    };

    writeln!(out, "Từ điển Gen Z 🤟 | Cập nhật ngôn ngữ hệ tư tưởng mới")?;
    writeln!(out, "{prompt}  (:help để xem lệnh)")?;
    out.flush()?;

    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowResults(results) => {
                write!(out, "{}", renderer.results(&results))?;
            }
            AppEvent::StatusUpdate(status) => {
                writeln!(out, "{}", renderer.status(&status))?;
            }
            AppEvent::Notice(text) => {
                writeln!(out, "{text}")?;
            }
            AppEvent::UiEvent(UiEvent::Help) => {
                writeln!(out, "{HELP}")?;
            }
            AppEvent::UiEvent(UiEvent::Close) => {
                out.flush()?;
                break;
            }
            _ => {}
        }
        out.flush()?;
    }

    Ok(())
}
