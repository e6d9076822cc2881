#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

use std::fmt;

use strum::EnumIter;
use strum::IntoEnumIterator;

/// Top-level screens. Each path maps to exactly one screen, there are no
/// nested routes, parameters or guards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter)]
pub enum Route {
    #[default]
    Login,
    Signup,
    ForgetPassword,
    Main,
    About,
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        return Route::iter().find(|e| return e.path() == path.trim());
    }

    pub fn paths() -> Vec<&'static str> {
        return Route::iter().map(|e| return e.path()).collect();
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => return "/",
            Route::Signup => return "/signup",
            Route::ForgetPassword => return "/forget-password",
            Route::Main => return "/main",
            Route::About => return "/about",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => return "Log in",
            Route::Signup => return "Sign up",
            Route::ForgetPassword => return "Forgot password",
            Route::Main => return "Chat with your PDFs",
            Route::About => return "About",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.path());
    }
}
