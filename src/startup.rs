use crate::actions::{AutoConfirm, ConfirmAction, Confirmer};
use crate::api::ApiClient;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::error::{config_error, Error};
use crate::notify::LogNotifier;
use crate::session::SessionContext;
use async_trait::async_trait;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the configuration and apply its locale
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => {
            rust_i18n::set_locale(&config.locale);
            info!("Setting locale to {}", config.locale);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the dashboard and sign in with the configured credentials
pub async fn connect(
    config: &Config,
    confirmer: Box<dyn Confirmer>,
) -> miette::Result<Dashboard<LogNotifier>> {
    let session = SessionContext::new(config.persist_session);
    let api = ApiClient::new(config, session)?;
    let dashboard = Dashboard::new(api, LogNotifier, confirmer);

    let (email, password) = config
        .credentials()
        .ok_or_else(|| config_error("SALON_EMAIL and SALON_PASSWORD must be set"))?;

    dashboard
        .sign_in(email, password, config.account, config.persist_session)
        .await
        .ok_or(Error::NotSignedIn)?;

    Ok(dashboard)
}

/// Confirmer for the terminal: `--yes` skips the prompt
pub fn confirmer(assume_yes: bool) -> Box<dyn Confirmer> {
    if assume_yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirmer)
    }
}

/// Asks on stdin, accepting `y`/`yes`/`o`/`oui`
pub struct StdinConfirmer;

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, action: &ConfirmAction) -> bool {
        let prompt = format!(
            "{}\n{}\n{} [y/N] ",
            action.title, action.description, action.action_label
        );

        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            let mut stdout = io::stdout();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line),
            Ok(Err(e)) => {
                error!("Failed to read confirmation: {}", e);
                false
            }
            Err(e) => {
                error!("Confirmation task failed: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "o" | "oui"
    )
}
