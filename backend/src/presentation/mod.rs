// Screen state for the news reader
pub mod app;
pub mod bookmark;
pub mod details;
pub mod home;
pub mod messages;
pub mod navigation;
pub mod onboarding;
pub mod search;
pub mod state;

pub use app::{MainState, MainViewModel, SPLASH_DELAY};
pub use bookmark::{BookmarkState, BookmarkViewModel};
pub use details::{DetailsEvent, DetailsState, DetailsViewModel};
pub use home::{HomeEvent, HomeState, HomeViewModel};
pub use messages::{empty_screen_message, load_error_message};
pub use navigation::Route;
pub use onboarding::{OnBoardingEvent, OnBoardingState, OnBoardingViewModel};
pub use search::{SearchEvent, SearchState, SearchViewModel};
pub use state::StateHolder;
