//! OS signal handling.

use super::Shutdown;

/// Trigger `shutdown` on the first Ctrl+C.
pub async fn trigger_on_ctrl_c(shutdown: &Shutdown) -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::info!("Ctrl+C received");
    let notified = shutdown.trigger();
    tracing::debug!(notified, "Shutdown broadcast");
    Ok(())
}
