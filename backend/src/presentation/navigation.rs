use std::fmt;

/// Navigation destinations and the graphs that group them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    OnBoardingScreen,
    HomeScreen,
    SearchScreen,
    BookmarkScreen,
    DetailsScreen,
    AppStartNavigation,
    NewsNavigation,
    NewsNavigatorScreen,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::OnBoardingScreen,
        Route::HomeScreen,
        Route::SearchScreen,
        Route::BookmarkScreen,
        Route::DetailsScreen,
        Route::AppStartNavigation,
        Route::NewsNavigation,
        Route::NewsNavigatorScreen,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            Route::OnBoardingScreen => "onBoardingScreen",
            Route::HomeScreen => "homeScreen",
            Route::SearchScreen => "searchScreen",
            Route::BookmarkScreen => "bookmarkScreen",
            Route::DetailsScreen => "detailsScreen",
            Route::AppStartNavigation => "appStartNavigation",
            Route::NewsNavigation => "newsNavigation",
            Route::NewsNavigatorScreen => "newsNavigator",
        }
    }

    pub fn from_route(route: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.route() == route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
