//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default level; `RUST_LOG` still wins.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr fmt subscriber so stdout stays clean for cipher output.
pub fn init_tracing(verbose: u8, color: bool) -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(level_for(verbose).into())
                    .from_env_lossy(),
            )
            .with_writer(std::io::stderr)
            .with_ansi(color)
            .with_target(verbose > 2)
            .finish(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    Ok(())
}
