//! Navigation from outside the presentation layer.
//!
//! The HTTP interceptor has to move the user to the login page or to
//! workshop selection. Front-ends register a [`Navigator`] once at startup;
//! until then navigation requests are only logged.

use std::sync::{Arc, OnceLock};

/// Login page, target of the hard redirect after a failed refresh.
pub const ROUTE_LOGIN: &str = "/login";
/// Registration page.
pub const ROUTE_REGISTRO: &str = "/registro";
/// Workshop selection, target after a workshop session ends.
pub const ROUTE_TALLERES: &str = "/dashboard/talleres";
/// Landing page after login.
pub const ROUTE_HOME: &str = "/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

/// Moves the user between routes.
pub trait Navigator: Send + Sync {
    /// In-app navigation.
    fn navigate(&self, to: &str, options: NavigateOptions);

    /// Full reload at `to`, dropping in-memory state.
    fn hard_redirect(&self, to: &str);
}

static NAVIGATOR: OnceLock<Arc<dyn Navigator>> = OnceLock::new();

/// Register the process-wide navigator. Only the first call wins.
pub fn set_navigator(navigator: Arc<dyn Navigator>) -> bool {
    NAVIGATOR.set(navigator).is_ok()
}

pub fn global_navigator() -> Option<Arc<dyn Navigator>> {
    NAVIGATOR.get().cloned()
}
