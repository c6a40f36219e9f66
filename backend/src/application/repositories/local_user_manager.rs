use crate::domain::DomainResult;
use async_trait::async_trait;
use tokio::sync::watch;

/// Durable user settings.
///
/// Currently holds a single flag: whether the user has finished onboarding
/// (the "app entry").
#[async_trait]
pub trait LocalUserManager: Send + Sync {
    /// Marks onboarding as completed. Calling it again has no further effect.
    async fn save_app_entry(&self) -> DomainResult<()>;

    /// Live view of the onboarding flag; `false` until `save_app_entry` succeeds.
    fn read_app_entry(&self) -> watch::Receiver<bool>;
}
