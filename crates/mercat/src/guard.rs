//! Route gating over the session state.

use crate::auth::Session;

/// Access requirement for a navigable view or operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Reachable with or without a session.
    Public,
    /// Requires a token; any role.
    Authenticated,
    /// Requires a token and a role from the allow-list.
    Role(Vec<String>),
}

impl RoutePolicy {
    /// Convenience policy for admin-only views.
    pub fn admin() -> Self {
        RoutePolicy::Role(vec!["admin".to_string()])
    }
}

/// The guard's decision for a given policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Render the view.
    Granted,
    /// No token: render a redirect to the login view.
    RedirectToLogin,
    /// Authenticated, but the role is not in the allow-list.
    Denied,
}

/// Decides whether a navigation target may render.
///
/// Purely a function of the session's state at check time; nothing is
/// cached, so a login or logout followed by a re-check always reflects the
/// new state. Decisions are synchronous; run [`Session::initialize`] once
/// at startup first.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    /// Create a guard reading the given session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Evaluate a policy against the current session state.
    pub fn check(&self, policy: &RoutePolicy) -> RouteAccess {
        match policy {
            RoutePolicy::Public => RouteAccess::Granted,
            RoutePolicy::Authenticated => {
                if self.session.is_authenticated() {
                    RouteAccess::Granted
                } else {
                    RouteAccess::RedirectToLogin
                }
            }
            RoutePolicy::Role(allowed) => {
                if !self.session.is_authenticated() {
                    return RouteAccess::RedirectToLogin;
                }
                match self.session.role() {
                    Some(role) if allowed.iter().any(|r| *r == role) => RouteAccess::Granted,
                    _ => RouteAccess::Denied,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthToken;

    fn logged_in(role: Option<&str>) -> Session {
        let session = Session::in_memory();
        session
            .login(AuthToken::new("T1"), role.map(str::to_string))
            .unwrap();
        session
    }

    #[test]
    fn public_is_always_granted() {
        let guard = RouteGuard::new(Session::in_memory());
        assert_eq!(guard.check(&RoutePolicy::Public), RouteAccess::Granted);
    }

    #[test]
    fn authenticated_requires_token() {
        let session = Session::in_memory();
        let guard = RouteGuard::new(session.clone());
        assert_eq!(
            guard.check(&RoutePolicy::Authenticated),
            RouteAccess::RedirectToLogin
        );

        session.login(AuthToken::new("T1"), None).unwrap();
        assert_eq!(
            guard.check(&RoutePolicy::Authenticated),
            RouteAccess::Granted
        );
    }

    #[test]
    fn role_policy_grants_matching_role() {
        let guard = RouteGuard::new(logged_in(Some("admin")));
        assert_eq!(guard.check(&RoutePolicy::admin()), RouteAccess::Granted);
    }

    #[test]
    fn role_policy_denies_other_roles() {
        let guard = RouteGuard::new(logged_in(Some("user")));
        assert_eq!(guard.check(&RoutePolicy::admin()), RouteAccess::Denied);
    }

    #[test]
    fn role_policy_denies_missing_role() {
        let guard = RouteGuard::new(logged_in(None));
        assert_eq!(guard.check(&RoutePolicy::admin()), RouteAccess::Denied);
    }

    #[test]
    fn role_policy_redirects_when_unauthenticated() {
        let guard = RouteGuard::new(Session::in_memory());
        assert_eq!(
            guard.check(&RoutePolicy::admin()),
            RouteAccess::RedirectToLogin
        );
    }

    #[test]
    fn decision_is_never_cached() {
        let session = Session::in_memory();
        let guard = RouteGuard::new(session.clone());

        session.login(AuthToken::new("T1"), None).unwrap();
        assert_eq!(
            guard.check(&RoutePolicy::Authenticated),
            RouteAccess::Granted
        );

        session.logout().unwrap();
        assert_eq!(
            guard.check(&RoutePolicy::Authenticated),
            RouteAccess::RedirectToLogin
        );
    }
}
