//! Navigation guards

use super::{LOGIN_PATH, RouteMatch};

/// Anything that can tell whether a bearer token is currently held
pub trait TokenSource {
    fn has_token(&self) -> bool;
}

/// Verdict of a guard for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Interceptor consulted before every route transition
pub trait NavigationGuard {
    fn check(&self, to: &RouteMatch) -> GuardDecision;
}

/// Sends signed-out users from protected routes to the login page.
///
/// Looks only at the token held at the instant of the check; it never waits
/// for a profile refresh that may still be running.
pub struct AuthGuard<'a, T: TokenSource + ?Sized> {
    tokens: &'a T,
}

impl<'a, T: TokenSource + ?Sized> AuthGuard<'a, T> {
    pub fn new(tokens: &'a T) -> Self {
        Self { tokens }
    }
}

impl<T: TokenSource + ?Sized> NavigationGuard for AuthGuard<'_, T> {
    fn check(&self, to: &RouteMatch) -> GuardDecision {
        if to.route.requires_auth && !self.tokens.has_token() {
            GuardDecision::Redirect(LOGIN_PATH)
        } else {
            GuardDecision::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;
    use std::cell::Cell;

    struct Flag(Cell<bool>);

    impl TokenSource for Flag {
        fn has_token(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_guard_reads_token_at_check_time() {
        let flag = Flag(Cell::new(true));
        let guard = AuthGuard::new(&flag);
        let dashboard = Router::new().resolve("/dashboard").unwrap();

        assert_eq!(guard.check(&dashboard), GuardDecision::Allow);

        flag.0.set(false);
        assert_eq!(guard.check(&dashboard), GuardDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn test_guard_ignores_public_routes() {
        let flag = Flag(Cell::new(false));
        let guard = AuthGuard::new(&flag);
        let home = Router::new().resolve("/").unwrap();
        assert_eq!(guard.check(&home), GuardDecision::Allow);
    }
}
