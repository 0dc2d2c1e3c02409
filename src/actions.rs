//! Destructive actions gated behind a yes/no confirmation.

use crate::error::AdminResult;
use crate::notify::{Notification, Notifier};
use async_trait::async_trait;
use rust_i18n::t;
use std::future::Future;
use tracing::{info, warn};

/// Text of the confirmation prompt and of the notification after success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmAction {
    pub title: String,
    pub description: String,
    pub action_label: String,
    pub success_message: String,
}

/// Result of a confirmed action; errors are reported, never propagated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    Declined,
    Completed(T),
    Failed(String),
}

impl<T> ActionOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed(_))
    }
}

/// Asks the user to approve an action
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, action: &ConfirmAction) -> bool;
}

/// Answers every prompt the same way, e.g. for `--yes`
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirmer for AutoConfirm {
    async fn confirm(&self, _action: &ConfirmAction) -> bool {
        self.0
    }
}

impl ConfirmAction {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        action_label: impl Into<String>,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            action_label: action_label.into(),
            success_message: success_message.into(),
        }
    }

    pub fn remove_slot() -> Self {
        Self::new(
            t!("confirm.remove_slot_title"),
            t!("confirm.remove_slot_description"),
            t!("confirm.remove"),
            t!("notice.slot_removed"),
        )
    }

    pub fn remove_special_slot() -> Self {
        Self::new(
            t!("confirm.remove_special_title"),
            t!("confirm.remove_special_description"),
            t!("confirm.remove"),
            t!("notice.special_removed"),
        )
    }

    pub fn remove_member() -> Self {
        Self::new(
            t!("confirm.remove_member_title"),
            t!("confirm.remove_member_description"),
            t!("confirm.remove"),
            t!("notice.member_removed"),
        )
    }

    pub fn cancel_appointment() -> Self {
        Self::new(
            t!("confirm.cancel_appointment_title"),
            t!("confirm.cancel_appointment_description"),
            t!("confirm.cancel"),
            t!("notice.appointment_cancelled"),
        )
    }

    /// Prompt, then run `action` if approved and notify about the result
    pub async fn run<T, F, Fut>(
        &self,
        confirmer: &dyn Confirmer,
        notifier: &dyn Notifier,
        action: F,
    ) -> ActionOutcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AdminResult<T>>,
    {
        if !confirmer.confirm(self).await {
            info!("{} declined", self.title);
            return ActionOutcome::Declined;
        }

        match action().await {
            Ok(value) => {
                notifier.notify(Notification::success(self.success_message.clone()));
                ActionOutcome::Completed(value)
            }
            Err(e) => {
                warn!("{} failed: {}", self.title, e);
                let message = e.user_message();
                notifier.notify(Notification::error(message.clone()));
                ActionOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::api_error;
    use crate::notify::{ChannelNotifier, Level};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingConfirmer {
        answer: bool,
        asked: AtomicUsize,
    }

    #[async_trait]
    impl Confirmer for CountingConfirmer {
        async fn confirm(&self, _action: &ConfirmAction) -> bool {
            self.asked.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }

    fn action() -> ConfirmAction {
        ConfirmAction::new("Remove", "Sure?", "Remove", "Removed")
    }

    #[tokio::test]
    async fn test_declined_does_not_run() {
        let confirmer = CountingConfirmer {
            answer: false,
            asked: AtomicUsize::new(0),
        };
        let (notifier, mut receiver) = ChannelNotifier::new();
        let ran = AtomicUsize::new(0);

        let outcome: ActionOutcome<()> = action()
            .run(&confirmer, &notifier, || async {
                ran.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert_eq!(outcome, ActionOutcome::Declined);
        assert_eq!(confirmer.asked.load(Ordering::SeqCst), 1);
        assert_eq!(ran.load(Ordering::SeqCst), 0);
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_completed_notifies_success() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        let outcome = action()
            .run(&AutoConfirm(true), &notifier, || async { Ok(42) })
            .await;

        assert_eq!(outcome, ActionOutcome::Completed(42));
        assert_eq!(receiver.try_recv().unwrap(), Notification::success("Removed"));
    }

    #[tokio::test]
    async fn test_failure_is_caught() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        let outcome: ActionOutcome<()> = action()
            .run(&AutoConfirm(true), &notifier, || async {
                Err(api_error(500, "boom"))
            })
            .await;

        let expected = "Something went wrong, please contact support".to_string();
        assert_eq!(outcome, ActionOutcome::Failed(expected.clone()));
        let notification = receiver.try_recv().unwrap();
        assert_eq!(notification.level, Level::Error);
        assert_eq!(notification.message, expected);
    }

    #[test]
    fn test_localized_prompts() {
        let remove = ConfirmAction::remove_slot();
        assert_eq!(remove.action_label, "Remove");
        assert_eq!(remove.success_message, "Time slot removed");
        assert!(!ConfirmAction::cancel_appointment().description.is_empty());
    }
}
