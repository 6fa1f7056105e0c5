//! Route-level role gate.
//!
//! Evaluated on every render: a pure function of the provider's readiness,
//! identity and roles. The only side effect is the history replacement, which
//! is skipped when the navigator already shows the redirect target.

use serde::Serialize;

use boardroom_auth::{AuthProvider, Role, RoleHierarchy};

use crate::navigation::Navigator;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_FALLBACK_PATH: &str = "/";

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Authentication has not resolved yet.
    Checking,
    /// Ready, but nobody is logged in.
    Unauthenticated,
    /// Logged in without a senior enough role.
    Forbidden,
    Authorized,
}

/// What the caller should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    /// Neutral loading indicator.
    Loading,
    /// Navigation was (or already had been) redirected to `to`.
    Redirected { state: GateState, to: String },
    /// The protected content, unchanged.
    Content(T),
}

impl<T> Rendered<T> {
    pub fn state(&self) -> GateState {
        match self {
            Rendered::Loading => GateState::Checking,
            Rendered::Redirected { state, .. } => *state,
            Rendered::Content(_) => GateState::Authorized,
        }
    }

    pub fn content(self) -> Option<T> {
        match self {
            Rendered::Content(t) => Some(t),
            _ => None,
        }
    }
}

/// Guard for one protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGate {
    required: Vec<Role>,
    login_path: String,
    fallback_path: String,
}

impl RoleGate {
    pub fn new(required: Vec<Role>) -> Self {
        Self {
            required,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
        }
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }

    pub fn required(&self) -> &[Role] {
        &self.required
    }

    /// Decide the state without touching navigation.
    pub fn evaluate<A>(&self, auth: &A, hierarchy: &RoleHierarchy) -> GateState
    where
        A: AuthProvider + ?Sized,
    {
        if !auth.is_ready() {
            return GateState::Checking;
        }
        let Some(identity) = auth.identity() else {
            return GateState::Unauthenticated;
        };
        if hierarchy.satisfies_any(identity.roles(), &self.required) {
            GateState::Authorized
        } else {
            GateState::Forbidden
        }
    }

    /// Where a state sends the user, if anywhere.
    pub fn redirect_target(&self, state: GateState) -> Option<&str> {
        match state {
            GateState::Unauthenticated => Some(&self.login_path),
            GateState::Forbidden => Some(&self.fallback_path),
            GateState::Checking | GateState::Authorized => None,
        }
    }

    /// Evaluate, redirect if needed, and render `content` only when authorized.
    ///
    /// Every unauthenticated or forbidden render ends on the redirect target.
    /// Once the navigator is there, further renders do not navigate again.
    pub fn render<A, N, T>(
        &self,
        auth: &A,
        hierarchy: &RoleHierarchy,
        nav: &mut N,
        content: impl FnOnce() -> T,
    ) -> Rendered<T>
    where
        A: AuthProvider + ?Sized,
        N: Navigator + ?Sized,
    {
        let state = self.evaluate(auth, hierarchy);
        tracing::debug!(?state, required = ?self.required, provider = auth.name(), "gate evaluated");

        let Some(target) = self.redirect_target(state) else {
            return match state {
                GateState::Authorized => Rendered::Content(content()),
                _ => Rendered::Loading,
            };
        };

        if nav.current() != target {
            tracing::info!(?state, from = nav.current(), to = %target, "gate redirect");
            nav.replace(target);
        }
        Rendered::Redirected {
            state,
            to: target.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::HistoryNavigator;
    use boardroom_auth::{Identity, StubAuthProvider};

    fn ready_with(roles: Vec<Role>) -> StubAuthProvider {
        let mut auth = StubAuthProvider::new();
        auth.resolve(Some(Identity::new("Test", roles)));
        auth
    }

    #[test]
    fn redirect_targets_follow_state() {
        let gate = RoleGate::new(vec![Role::MANAGEMENT])
            .with_login_path("/anmelden")
            .with_fallback_path("/start");
        assert_eq!(gate.redirect_target(GateState::Unauthenticated), Some("/anmelden"));
        assert_eq!(gate.redirect_target(GateState::Forbidden), Some("/start"));
        assert_eq!(gate.redirect_target(GateState::Checking), None);
        assert_eq!(gate.redirect_target(GateState::Authorized), None);
    }

    #[test]
    fn empty_requirement_admits_any_identity() {
        let gate = RoleGate::new(Vec::new());
        let auth = ready_with(vec![Role::new("praktikant")]);
        assert_eq!(
            gate.evaluate(&auth, RoleHierarchy::standard()),
            GateState::Authorized
        );
    }

    #[test]
    fn unknown_requirement_forbids_even_executives() {
        let gate = RoleGate::new(vec![Role::new("admin")]);
        let auth = ready_with(vec![Role::EXECUTIVE]);
        assert_eq!(
            gate.evaluate(&auth, RoleHierarchy::standard()),
            GateState::Forbidden
        );
    }

    #[test]
    fn redirects_again_after_a_role_change() {
        let gate = RoleGate::new(vec![Role::MANAGEMENT]);
        let mut nav = HistoryNavigator::new("/management");
        let mut auth = ready_with(vec![Role::STAFF]);
        let h = RoleHierarchy::standard();

        gate.render(&auth, h, &mut nav, || ());
        assert_eq!(nav.replacements(), 1);

        nav.push("/management");
        auth.resolve(Some(Identity::new("Test", vec![Role::MANAGEMENT])));
        assert_eq!(gate.render(&auth, h, &mut nav, || 7).content(), Some(7));

        auth.resolve(Some(Identity::new("Test", vec![Role::STAFF])));
        gate.render(&auth, h, &mut nav, || ());
        assert_eq!(nav.replacements(), 2);
        assert_eq!(nav.current(), DEFAULT_FALLBACK_PATH);
    }

    #[test]
    fn returning_to_a_forbidden_page_redirects_again() {
        let gate = RoleGate::new(vec![Role::EXECUTIVE]);
        let mut nav = HistoryNavigator::new("/executive");
        let auth = ready_with(vec![Role::STAFF]);
        let h = RoleHierarchy::standard();

        gate.render(&auth, h, &mut nav, || ());
        nav.push("/executive");
        let again = gate.render(&auth, h, &mut nav, || ());

        assert_eq!(again.state(), GateState::Forbidden);
        assert_eq!(nav.current(), DEFAULT_FALLBACK_PATH);
        assert_eq!(nav.replacements(), 2);
    }

    #[test]
    fn no_navigation_when_already_on_target() {
        let gate = RoleGate::new(vec![Role::new("admin")]);
        let mut nav = HistoryNavigator::new(DEFAULT_FALLBACK_PATH);
        let auth = ready_with(vec![Role::STAFF]);

        let out = gate.render(&auth, RoleHierarchy::standard(), &mut nav, || ());
        assert_eq!(out.state(), GateState::Forbidden);
        assert_eq!(nav.replacements(), 0);
    }

    #[test]
    fn changing_target_redirects_again() {
        let gate = RoleGate::new(vec![Role::MANAGEMENT]);
        let mut nav = HistoryNavigator::new("/management");
        let mut auth = ready_with(vec![Role::STAFF]);
        let h = RoleHierarchy::standard();

        let first = gate.render(&auth, h, &mut nav, || ());
        assert_eq!(first.state(), GateState::Forbidden);

        auth.logout();
        let second = gate.render(&auth, h, &mut nav, || ());
        assert_eq!(second.state(), GateState::Unauthenticated);
        assert_eq!(nav.replacements(), 2);
        assert_eq!(nav.current(), DEFAULT_LOGIN_PATH);
    }
}
