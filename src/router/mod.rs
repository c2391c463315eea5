//! Route table and path matching
//!
//! The table is fixed at startup. Matching is segment-wise: a `:name`
//! segment in a route path captures the corresponding segment of the
//! requested path.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, RouteError};

mod guard;

pub use guard::{AuthGuard, GuardDecision, NavigationGuard, TokenSource};

/// Where the auth guard sends signed-out users
pub const LOGIN_PATH: &str = "/login";

/// View rendered for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    Dashboard,
    RoomDetail,
    MyReservations,
}

/// Static route descriptor
#[derive(Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

/// Application route table
pub static ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        view: View::Home,
        requires_auth: false,
    },
    Route {
        path: "/login",
        name: "login",
        view: View::Login,
        requires_auth: false,
    },
    Route {
        path: "/register",
        name: "register",
        view: View::Register,
        requires_auth: false,
    },
    Route {
        path: "/dashboard",
        name: "dashboard",
        view: View::Dashboard,
        requires_auth: true,
    },
    Route {
        path: "/room/:id",
        name: "room-detail",
        view: View::RoomDetail,
        requires_auth: false,
    },
    Route {
        path: "/my-reservations",
        name: "my-reservations",
        view: View::MyReservations,
        requires_auth: true,
    },
];

/// A route resolved against a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static Route,
    /// Normalized requested path
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Parse a captured parameter as an integer ID
    pub fn id_param(&self, name: &str) -> Result<i64> {
        let value = self.param(name).unwrap_or_default();
        value.parse::<i64>().map_err(|_| {
            RouteError::InvalidParam {
                param: name.to_string(),
                value: value.to_string(),
            }
            .into()
        })
    }
}

impl fmt::Display for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.route.name)
    }
}

/// Outcome of one navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The requested route is shown
    Allowed(RouteMatch),
    /// A guard sent the user elsewhere
    Redirected { from: RouteMatch, to: RouteMatch },
}

impl Navigation {
    /// Route that ends up being shown
    pub fn destination(&self) -> &RouteMatch {
        match self {
            Navigation::Allowed(to) => to,
            Navigation::Redirected { to, .. } => to,
        }
    }
}

/// Resolves paths against a route table and runs the navigation guard
#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [Route],
}

impl Default for Router {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn by_name(&self, name: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Match `path` against the table; the first matching route wins
    pub fn resolve(&self, path: &str) -> Result<RouteMatch> {
        let normalized = normalize(path);
        let requested: Vec<&str> = segments(&normalized).collect();

        for route in self.routes {
            if let Some(params) = match_segments(route.path, &requested) {
                return Ok(RouteMatch {
                    route,
                    path: normalized,
                    params,
                });
            }
        }

        Err(RouteError::NotFound(normalized).into())
    }

    /// Resolve `path` and let `guard` decide whether it may be shown.
    ///
    /// The decision is final: a redirect target is not guarded again.
    pub fn navigate(&self, path: &str, guard: &dyn NavigationGuard) -> Result<Navigation> {
        let to = self.resolve(path)?;

        match guard.check(&to) {
            GuardDecision::Allow => {
                log::debug!("Navigation to {} allowed", to);
                Ok(Navigation::Allowed(to))
            }
            GuardDecision::Redirect(target) => {
                let redirect = self.resolve(target)?;
                log::debug!("Navigation to {} redirected to {}", to, redirect);
                Ok(Navigation::Redirected {
                    from: to,
                    to: redirect,
                })
            }
        }
    }
}

/// Strip query and fragment, force a leading slash, drop trailing slashes
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_matches('/');
    format!("/{}", trimmed)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn match_segments(pattern: &str, requested: &[&str]) -> Option<BTreeMap<String, String>> {
    let expected: Vec<&str> = segments(pattern).collect();
    if expected.len() != requested.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (want, got) in expected.iter().zip(requested) {
        match want.strip_prefix(':') {
            Some(name) => {
                params.insert(name.to_string(), (*got).to_string());
            }
            None if want.eq_ignore_ascii_case(got) => {}
            None => return None,
        }
    }
    Some(params)
}
