use super::state::StateHolder;
use crate::application::repositories::LocalUserManager;
use crate::application::use_cases::AppEntryUseCases;
use crate::domain::DomainResult;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

pub const PAGE_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnBoardingEvent {
    NextPage,
    PreviousPage,
    SaveAppEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnBoardingState {
    pub current_page: usize,
    pub page_count: usize,
}

impl Default for OnBoardingState {
    fn default() -> Self {
        OnBoardingState {
            current_page: 0,
            page_count: PAGE_COUNT,
        }
    }
}

impl OnBoardingState {
    /// Labels of the (back, forward) buttons; an empty label hides the button
    pub fn buttons(&self) -> (&'static str, &'static str) {
        match self.current_page {
            0 => ("", "Next"),
            1 => ("Back", "Next"),
            2 => ("Back", "Get Started"),
            _ => ("", ""),
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page + 1 >= self.page_count
    }
}

pub struct OnBoardingViewModel<M: LocalUserManager + ?Sized> {
    use_cases: Arc<AppEntryUseCases<M>>,
    state: StateHolder<OnBoardingState>,
}

impl<M: LocalUserManager + ?Sized> OnBoardingViewModel<M> {
    pub fn new(use_cases: Arc<AppEntryUseCases<M>>) -> Self {
        OnBoardingViewModel {
            use_cases,
            state: StateHolder::new(OnBoardingState::default()),
        }
    }

    pub fn state(&self) -> OnBoardingState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<OnBoardingState> {
        self.state.subscribe()
    }

    /// Moving past the last page completes onboarding
    pub async fn on_event(&self, event: OnBoardingEvent) -> DomainResult<()> {
        match event {
            OnBoardingEvent::NextPage if self.state.snapshot().is_last_page() => {
                self.save_app_entry().await
            }
            OnBoardingEvent::NextPage => {
                self.state.update(|s| s.current_page += 1);
                Ok(())
            }
            OnBoardingEvent::PreviousPage => {
                self.state
                    .update(|s| s.current_page = s.current_page.saturating_sub(1));
                Ok(())
            }
            OnBoardingEvent::SaveAppEntry => self.save_app_entry().await,
        }
    }

    async fn save_app_entry(&self) -> DomainResult<()> {
        self.use_cases.save_app_entry.execute().await?;
        info!("Onboarding finished");
        Ok(())
    }
}
