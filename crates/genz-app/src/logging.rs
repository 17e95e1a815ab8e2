use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Level used while the config file, and with it `log_filter`, is still
/// being read
pub const BOOTSTRAP_FILTER: &str = "warn";

/// `RUST_LOG` when set, `default` otherwise
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn subscriber<W>(filter: EnvFilter, json: bool, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter);

    if json {
        Box::new(builder.json().finish())
    } else {
        Box::new(builder.finish())
    }
}

/// Logs go to stderr so piped stdout stays clean
pub fn stderr_subscriber(default_filter: &str, json: bool) -> Box<dyn Subscriber + Send + Sync> {
    subscriber(env_filter(default_filter), json, std::io::stderr)
}
