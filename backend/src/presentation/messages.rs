use crate::application::paging::{LoadErrorKind, PageLoadError};

pub const SERVER_UNAVAILABLE: &str = "Server Unavailable.";
pub const INTERNET_UNAVAILABLE: &str = "Internet Unavailable.";
pub const UNKNOWN_ERROR: &str = "Unknown Error.";
pub const NO_SAVED_NEWS: &str = "You have not saved news so far !";

pub fn load_error_message(kind: LoadErrorKind) -> &'static str {
    match kind {
        LoadErrorKind::ServerUnavailable => SERVER_UNAVAILABLE,
        LoadErrorKind::InternetUnavailable => INTERNET_UNAVAILABLE,
        LoadErrorKind::Unknown => UNKNOWN_ERROR,
    }
}

/// Text for an empty list: the failure if there is one, otherwise the empty bookmarks notice
pub fn empty_screen_message(error: Option<&PageLoadError>) -> &'static str {
    match error {
        Some(error) => load_error_message(error.kind()),
        None => NO_SAVED_NEWS,
    }
}
