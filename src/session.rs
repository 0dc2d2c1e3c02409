use crate::api::models::PaymentOption;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Account kind of the signed-in user
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Salon,
    Member,
}

/// Signed-in user as returned by the login and refresh endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub role: Role,
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub booking_terms: Option<String>,
    #[serde(default)]
    pub auto_accept_appointments: Option<bool>,
    #[serde(default)]
    pub is_in_vacancy_mode: Option<bool>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub default_payment_option: Option<PaymentOption>,
    /// Default deposit as a percentage of the price
    #[serde(default)]
    pub default_deposit: Option<u32>,
    #[serde(default)]
    pub stripe_connected_account_id: Option<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Salon
    }
}

#[derive(Debug, Default)]
struct SessionState {
    session: Option<Session>,
    persist: bool,
}

/// Shared sign-in state, handed explicitly to the API client and workflows.
///
/// Starts empty, is filled at sign-in and emptied at sign-out or when a token
/// refresh fails.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    /// Create an empty context; `persist` is the "remember me" choice
    pub fn new(persist: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState {
                session: None,
                persist,
            })),
        }
    }

    /// Store a fresh session
    pub async fn sign_in(&self, session: Session) {
        info!("Signed in as {} ({:?})", session.email, session.role);
        self.inner.write().await.session = Some(session);
    }

    /// Drop the current session, if any
    pub async fn sign_out(&self) {
        if self.inner.write().await.session.take().is_some() {
            info!("Session cleared");
        }
    }

    /// Snapshot of the current session
    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.session.clone()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .session
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub async fn is_signed_in(&self) -> bool {
        self.inner.read().await.session.is_some()
    }

    /// True only for a signed-in salon account
    pub async fn is_admin(&self) -> bool {
        self.inner
            .read()
            .await
            .session
            .as_ref()
            .is_some_and(Session::is_admin)
    }

    pub async fn persist(&self) -> bool {
        self.inner.read().await.persist
    }

    pub async fn set_persist(&self, persist: bool) {
        self.inner.write().await.persist = persist;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn salon_session() -> Session {
        serde_json::from_value(serde_json::json!({
            "accessToken": "token-1",
            "role": "SALON",
            "id": "salon-1",
            "email": "salon@example.com",
            "name": "Chez Nous",
            "defaultPaymentOption": "DEPOSIT",
            "defaultDeposit": 30
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let ctx = SessionContext::new(false);
        assert!(!ctx.is_signed_in().await);
        assert!(!ctx.is_admin().await);
        assert_eq!(ctx.access_token().await, None);

        ctx.sign_in(salon_session()).await;
        assert!(ctx.is_signed_in().await);
        assert!(ctx.is_admin().await);
        assert_eq!(ctx.access_token().await.as_deref(), Some("token-1"));

        // Clones share the same state
        let other = ctx.clone();
        other.sign_out().await;
        assert!(!ctx.is_signed_in().await);
    }

    #[tokio::test]
    async fn test_member_is_not_admin() {
        let ctx = SessionContext::new(true);
        let mut session = salon_session();
        session.role = Role::Member;
        ctx.sign_in(session).await;

        assert!(ctx.is_signed_in().await);
        assert!(!ctx.is_admin().await);
        assert!(ctx.persist().await);
        ctx.set_persist(false).await;
        assert!(!ctx.persist().await);
    }

    #[test]
    fn test_session_defaults() {
        let session = salon_session();
        assert_eq!(session.default_deposit, Some(30));
        assert_eq!(session.default_payment_option, Some(PaymentOption::Deposit));
        assert_eq!(session.phone_number, None);
    }
}
