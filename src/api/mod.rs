mod appointments;
mod auth;
mod availability;
mod catalog;
pub mod endpoints;
mod members;
pub mod models;
mod salon;

use crate::config::Config;
use crate::error::{api_error, AdminResult, Error};
use crate::session::SessionContext;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Typed client for the salon REST API.
///
/// Private calls carry the session's bearer token. When the server rejects the
/// token the client refreshes it once through the refresh cookie and replays
/// the request; a failed refresh clears the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionContext,
}

impl ApiClient {
    /// Create a new client bound to `session`
    pub fn new(config: &Config, session: SessionContext) -> AdminResult<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url()?,
            session,
        })
    }

    /// The session this client reads tokens from and updates on refresh
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> AdminResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Send an unauthenticated request and check its status
    async fn public(&self, request: RequestBuilder) -> AdminResult<Response> {
        check(request.send().await?).await
    }

    /// Send an authenticated request, refreshing the token once if it is rejected.
    ///
    /// `build` is called again for the replay, so it must be repeatable.
    async fn private<F>(&self, build: F) -> AdminResult<Response>
    where
        F: Fn(&Client) -> AdminResult<RequestBuilder>,
    {
        let token = self
            .session
            .access_token()
            .await
            .ok_or(Error::NotSignedIn)?;

        let response = build(&self.http)?.bearer_auth(&token).send().await?;
        if !is_token_rejection(response.status()) {
            return check(response).await;
        }

        debug!("Access token rejected with {}, refreshing", response.status());
        let token = self.refresh().await?;
        let response = build(&self.http)?.bearer_auth(&token).send().await?;
        check(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AdminResult<T> {
        let url = self.url(path)?;
        debug!("GET {}", url);
        let response = self.private(|http| Ok(http.get(url.clone()))).await?;
        Ok(response.json().await?)
    }
}

fn is_token_rejection(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Turn non-success responses into `Error::Api`
async fn check(response: Response) -> AdminResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response".to_string());
    warn!("API request failed: HTTP {} - {}", status, body);
    Err(api_error(status.as_u16(), &body))
}
