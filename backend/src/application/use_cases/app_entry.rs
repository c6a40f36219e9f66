use crate::application::repositories::LocalUserManager;
use crate::domain::DomainResult;
use std::sync::Arc;
use tokio::sync::watch;

/// Use case for following whether onboarding has been completed
pub struct ReadAppEntry<M: LocalUserManager + ?Sized> {
    manager: Arc<M>,
}

impl<M: LocalUserManager + ?Sized> ReadAppEntry<M> {
    pub fn new(manager: Arc<M>) -> Self {
        Self { manager }
    }

    pub fn execute(&self) -> watch::Receiver<bool> {
        self.manager.read_app_entry()
    }
}

/// Use case for recording that onboarding has been completed
pub struct SaveAppEntry<M: LocalUserManager + ?Sized> {
    manager: Arc<M>,
}

impl<M: LocalUserManager + ?Sized> SaveAppEntry<M> {
    pub fn new(manager: Arc<M>) -> Self {
        Self { manager }
    }

    pub async fn execute(&self) -> DomainResult<()> {
        self.manager.save_app_entry().await
    }
}

/// Onboarding use cases, sharing one settings store
pub struct AppEntryUseCases<M: LocalUserManager + ?Sized> {
    pub read_app_entry: ReadAppEntry<M>,
    pub save_app_entry: SaveAppEntry<M>,
}

impl<M: LocalUserManager + ?Sized> AppEntryUseCases<M> {
    pub fn new(manager: Arc<M>) -> Self {
        Self {
            read_app_entry: ReadAppEntry::new(manager.clone()),
            save_app_entry: SaveAppEntry::new(manager),
        }
    }
}
