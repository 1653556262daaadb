//! Command implementations.

pub mod login;
pub mod logout;
pub mod orders;
pub mod products;
pub mod profile;
pub mod register;
pub mod tasks;
pub mod whoami;

use anyhow::{Result, bail};

use mercat::{ApiClient, RouteAccess, RouteGuard, RoutePolicy};

/// Everything a command needs, wired once in `main`.
pub struct AppContext {
    pub client: ApiClient,
    pub guard: RouteGuard,
}

/// Check the guard before running a protected command.
///
/// The CLI's equivalent of rendering a redirect: an unauthenticated user is
/// pointed at `mercat login`, an authenticated user with the wrong role gets
/// an access-denied error.
pub fn require(ctx: &AppContext, policy: &RoutePolicy) -> Result<()> {
    match ctx.guard.check(policy) {
        RouteAccess::Granted => Ok(()),
        RouteAccess::RedirectToLogin => {
            bail!("Not logged in. Run 'mercat login' first.")
        }
        RouteAccess::Denied => {
            bail!("Access denied: your role does not permit this command.")
        }
    }
}
