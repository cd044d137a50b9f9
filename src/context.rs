//! Application Context
//!
//! Route state provided via the Leptos Context API.

use leptos::prelude::*;

/// Screens of the application.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Home,
    CreatePoint,
    Completed,
    /// Browse screen; UF and city arrive as navigation parameters and
    /// cannot be changed from the screen itself.
    Points { uf: String, city: String },
    Detail { id: i64 },
}

/// Screen transition after a submission attempt: success moves to the
/// completion view, failure keeps the user on the form.
pub fn submit_outcome(result: &Result<(), String>) -> Option<Route> {
    match result {
        Ok(()) => Some(Route::Completed),
        Err(_) => None,
    }
}

/// App-wide navigation handle
#[derive(Clone, Copy)]
pub struct AppContext {
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: ReadSignal<Route>, set_route: WriteSignal<Route>) -> Self {
        Self { route, set_route }
    }

    /// Switch to another screen.
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_submission_moves_to_the_completion_view() {
        assert_eq!(submit_outcome(&Ok(())), Some(Route::Completed));
    }

    #[test]
    fn rejected_submission_stays_on_the_form() {
        let result = Err("point creation rejected: status 400".to_string());
        assert_eq!(submit_outcome(&result), None);
    }
}
