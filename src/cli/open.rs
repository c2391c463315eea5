//! Open command: navigate to a route and render its view

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ReservationApi;
use crate::error::Result;
use crate::router::{AuthGuard, Navigation, Router};
use crate::storage::DurableStorage;
use crate::views::{self, ViewContext};

/// Result of one navigation, gathered after the startup refresh settled
struct Visit {
    page: Result<(Navigation, String)>,
    session_expired: bool,
}

/// Run the open command.
///
/// Behaves like an application start: the stored session is restored, its
/// profile refresh runs alongside navigation, and the guard sees whatever
/// token is held when it checks.
pub async fn run(opts: &GlobalOptions, target: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let visit = visit(&ctx.view_context(), target).await;

    if visit.session_expired {
        eprintln!(
            "{} Your session has expired. Run {} to sign in again.",
            "⚠".yellow(),
            "roomctl login".cyan()
        );
    }

    let (navigation, page) = visit.page?;
    if let Navigation::Redirected { from, to } = &navigation {
        eprintln!(
            "{} {} requires sign-in, showing {}",
            "⚠".yellow(),
            from.path,
            to.path.cyan()
        );
    }

    println!("{}", page);
    Ok(())
}

/// Start the session, navigate and render, then wait for the startup refresh.
///
/// The refresh is awaited whatever navigation or rendering returned, so an
/// invalidated token is removed from storage before the process exits.
async fn visit<A, S>(ctx: &ViewContext<'_, A, S>, target: &str) -> Visit
where
    A: ReservationApi + ?Sized + 'static,
    S: DurableStorage + ?Sized + 'static,
{
    let had_token = ctx.session.is_authenticated();
    let init = ctx.session.init_session();

    let page = navigate_and_render(ctx, target).await;

    if init.is_pending() {
        log::debug!("Waiting for the session refresh to finish");
    }
    init.finished().await;

    Visit {
        page,
        session_expired: had_token && !ctx.session.is_authenticated(),
    }
}

async fn navigate_and_render<A, S>(
    ctx: &ViewContext<'_, A, S>,
    target: &str,
) -> Result<(Navigation, String)>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    let router = Router::new();
    let path = route_path(&router, target);
    let navigation = router.navigate(&path, &AuthGuard::new(ctx.session))?;
    let page = views::render(ctx, navigation.destination()).await?;
    Ok((navigation, page))
}

/// Accept a route name in place of a path when the route takes no parameters
fn route_path(router: &Router, target: &str) -> String {
    if !target.starts_with('/') {
        if let Some(route) = router.by_name(target) {
            if !route.path.contains(':') {
                return route.path.to_string();
            }
        }
    }
    target.to_string()
}
