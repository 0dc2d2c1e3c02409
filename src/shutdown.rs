use crate::api::ApiClient;
use crate::error::AdminResult;
use tracing::{info, warn};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
#[cfg(windows)]
use tokio::signal::windows::{ctrl_break, ctrl_c};

/// End the server session unless the user asked to stay signed in
pub async fn end_session(api: &ApiClient) {
    let session = api.session();
    if session.persist().await || !session.is_signed_in().await {
        return;
    }

    if let Err(e) = api.logout().await {
        warn!("Error signing out: {:?}", e);
    } else {
        info!("Session ended");
    }
}

/// Resolve when the process is asked to stop
#[cfg(unix)]
pub async fn wait_for_signal() -> AdminResult<()> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM signal, stopping");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT signal, stopping");
        }
    }
    Ok(())
}

/// Resolve when the process is asked to stop
#[cfg(windows)]
pub async fn wait_for_signal() -> AdminResult<()> {
    let mut ctrlc = ctrl_c()?;
    let mut ctrlbreak = ctrl_break()?;

    tokio::select! {
        _ = ctrlc.recv() => {
            info!("Received Ctrl+C signal, stopping");
        }
        _ = ctrlbreak.recv() => {
            info!("Received Ctrl+Break signal, stopping");
        }
    }
    Ok(())
}
