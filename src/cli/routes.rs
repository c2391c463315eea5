//! Routes command: list the navigation table

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output::format_rows;
use crate::router::{AuthGuard, GuardDecision, NavigationGuard, Route, Router, TokenSource};

/// Route row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RouteDisplay {
    #[tabled(rename = "PATH")]
    pub path: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "AUTH")]
    pub auth: String,

    /// What `open` would do with the current session
    #[tabled(rename = "ACCESS")]
    pub access: String,
}

/// Run the routes command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let rows = route_rows(&Router::new(), &ctx.session)?;
    println!("{}", format_rows(&rows, None, ctx.format)?);
    Ok(())
}

fn route_rows(router: &Router, tokens: &dyn TokenSource) -> Result<Vec<RouteDisplay>> {
    let guard = AuthGuard::new(tokens);
    router
        .routes()
        .iter()
        .map(|route| {
            Ok(RouteDisplay {
                path: route.path.to_string(),
                name: route.name.to_string(),
                auth: if route.requires_auth { "required" } else { "-" }.to_string(),
                access: access(router, &guard, route)?,
            })
        })
        .collect()
}

fn access(router: &Router, guard: &dyn NavigationGuard, route: &Route) -> Result<String> {
    // Any concrete value will do for a parameter segment
    let sample = route.path.replace(":id", "1");
    let to = router.resolve(&sample)?;
    Ok(match guard.check(&to) {
        GuardDecision::Allow => "open".to_string(),
        GuardDecision::Redirect(target) => format!("→ {}", target),
    })
}
