use super::endpoints;
use super::models::Credentials;
use super::ApiClient;
use crate::error::{AdminResult, Error};
use crate::session::Session;
use tracing::{info, warn};

impl ApiClient {
    /// Sign in with a salon account
    pub async fn login(&self, email: &str, password: &str) -> AdminResult<Session> {
        self.sign_in_at(endpoints::LOGIN, email, password).await
    }

    /// Sign in as a member; the password is the member's access code
    pub async fn login_member(&self, email: &str, access_code: &str) -> AdminResult<Session> {
        self.sign_in_at(endpoints::LOGIN_MEMBER, email, access_code)
            .await
    }

    async fn sign_in_at(&self, path: &str, email: &str, password: &str) -> AdminResult<Session> {
        let request = self
            .http
            .post(self.url(path)?)
            .json(&Credentials { email, password });
        let session: Session = self.public(request).await?.json().await?;
        self.session.sign_in(session.clone()).await;
        Ok(session)
    }

    /// Get a new access token from the refresh cookie.
    ///
    /// On success the session is replaced and the new token returned; on any
    /// failure the session is cleared.
    pub async fn refresh(&self) -> AdminResult<String> {
        let result = async {
            let request = self.http.get(self.url(endpoints::REFRESH)?);
            let session: Session = self.public(request).await?.json().await?;
            Ok::<_, Error>(session)
        }
        .await;

        match result {
            Ok(session) => {
                let token = session.access_token.clone();
                self.session.sign_in(session).await;
                Ok(token)
            }
            Err(e) => {
                warn!("Failed to refresh token: {}", e);
                self.session.sign_out().await;
                Err(Error::SessionExpired)
            }
        }
    }

    /// End the server session and clear the local one.
    ///
    /// The local session is cleared even if the server call fails.
    pub async fn logout(&self) -> AdminResult<()> {
        let request = self.http.get(self.url(endpoints::LOGOUT)?);
        let result = self.public(request).await.map(|_| ());
        self.session.sign_out().await;
        info!("Signed out");
        result
    }
}
