use super::navigation::Route;
use super::state::StateHolder;
use crate::application::repositories::LocalUserManager;
use crate::application::use_cases::AppEntryUseCases;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long the splash screen stays up after the start destination is known
pub const SPLASH_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainState {
    pub splash_condition: bool,
    pub start_destination: Route,
}

impl Default for MainState {
    fn default() -> Self {
        MainState {
            splash_condition: true,
            start_destination: Route::AppStartNavigation,
        }
    }
}

/// Picks the first screen from the onboarding flag.
///
/// Must be created inside a Tokio runtime. The background watcher stops when
/// the view model is dropped.
pub struct MainViewModel {
    state: StateHolder<MainState>,
    watcher: JoinHandle<()>,
}

impl MainViewModel {
    pub fn new<M: LocalUserManager + ?Sized>(use_cases: Arc<AppEntryUseCases<M>>) -> Self {
        Self::with_splash_delay(use_cases, SPLASH_DELAY)
    }

    pub fn with_splash_delay<M: LocalUserManager + ?Sized>(
        use_cases: Arc<AppEntryUseCases<M>>,
        splash_delay: Duration,
    ) -> Self {
        let state = StateHolder::new(MainState::default());
        let mut app_entry = use_cases.read_app_entry.execute();
        let holder = state.clone();

        let watcher = tokio::spawn(async move {
            loop {
                let onboarded = *app_entry.borrow_and_update();
                let destination = if onboarded {
                    Route::NewsNavigation
                } else {
                    Route::AppStartNavigation
                };
                debug!(%destination, "Start destination chosen");
                holder.update(|s| s.start_destination = destination);

                tokio::time::sleep(splash_delay).await;
                holder.update(|s| s.splash_condition = false);

                if app_entry.changed().await.is_err() {
                    break;
                }
            }
        });

        MainViewModel { state, watcher }
    }

    pub fn state(&self) -> MainState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<MainState> {
        self.state.subscribe()
    }
}

impl Drop for MainViewModel {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}
