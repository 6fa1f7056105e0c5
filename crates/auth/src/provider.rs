//! Authentication providers.
//!
//! The gate only reads readiness, identity and roles through [`AuthProvider`],
//! so swapping the stub for a real identity provider leaves gating untouched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use boardroom_core::SessionId;

use crate::{Claims, Identity, Role, TokenValidationError, validate_claims};

/// What a caller hands to [`AuthProvider::login`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Demo login: pick a name and the roles to act with.
    Demo { username: String, roles: Vec<Role> },

    /// A bearer token whose claims were already verified upstream.
    Bearer { token: String, claims: Claims },
}

impl Credentials {
    fn kind(&self) -> &'static str {
        match self {
            Credentials::Demo { .. } => "demo",
            Credentials::Bearer { .. } => "bearer",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("bearer token must not be empty")]
    EmptyToken,

    #[error("{provider} provider does not accept {kind} credentials")]
    UnsupportedCredentials {
        provider: &'static str,
        kind: &'static str,
    },

    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenValidationError),
}

/// Authentication capability consumed by the dashboard.
pub trait AuthProvider {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// False until the provider knows whether a session exists.
    fn is_ready(&self) -> bool;

    fn identity(&self) -> Option<&Identity>;

    /// Roles of the current identity; empty when nobody is logged in.
    fn roles(&self) -> &[Role] {
        self.identity().map(Identity::roles).unwrap_or(&[])
    }

    fn login(&mut self, credentials: Credentials) -> Result<SessionId, AuthError>;

    fn logout(&mut self);

    /// Bearer token for API calls, if the provider has one.
    fn token(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    id: SessionId,
    identity: Identity,
}

impl Session {
    fn open(identity: Identity) -> Self {
        Self {
            id: SessionId::new(),
            identity,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stub provider
// ─────────────────────────────────────────────────────────────────────────────

/// Placeholder provider used until a real identity provider is wired in.
///
/// Never issues a token.
#[derive(Debug, Default)]
pub struct StubAuthProvider {
    ready: bool,
    session: Option<Session>,
}

impl StubAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish session restoration, with or without a remembered identity.
    pub fn resolve(&mut self, identity: Option<Identity>) {
        self.ready = true;
        self.session = identity.map(Session::open);
        tracing::debug!(
            provider = self.name(),
            restored = self.session.is_some(),
            "auth state resolved"
        );
    }
}

impl AuthProvider for StubAuthProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    fn login(&mut self, credentials: Credentials) -> Result<SessionId, AuthError> {
        let (username, roles) = match credentials {
            Credentials::Demo { username, roles } => (username, roles),
            other => {
                return Err(AuthError::UnsupportedCredentials {
                    provider: self.name(),
                    kind: other.kind(),
                });
            }
        };

        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        let session = Session::open(Identity::new(username, roles));
        let id = session.id;
        tracing::info!(
            provider = self.name(),
            session_id = %id,
            user_id = %session.identity.user_id,
            roles = ?session.identity.roles,
            "login succeeded"
        );
        self.ready = true;
        self.session = Some(session);
        Ok(id)
    }

    fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(provider = self.name(), session_id = %session.id, "logged out");
        }
    }

    fn token(&self) -> Option<&str> {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Claims-backed provider
// ─────────────────────────────────────────────────────────────────────────────

/// Source of "now" for expiry checks.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug, Clone)]
struct TokenSession {
    session: Session,
    token: String,
    claims: Claims,
}

/// Provider backed by verified token claims.
///
/// Identity and token disappear as soon as the claims expire, so an expired
/// session is indistinguishable from a logged-out one.
pub struct ClaimsAuthProvider {
    clock: Clock,
    ready: bool,
    current: Option<TokenSession>,
}

impl core::fmt::Debug for ClaimsAuthProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClaimsAuthProvider")
            .field("ready", &self.ready)
            .field("session", &self.current.as_ref().map(|c| c.session.id))
            .finish_non_exhaustive()
    }
}

impl Default for ClaimsAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimsAuthProvider {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            ready: false,
            current: None,
        }
    }

    /// Finish start-up without a stored token.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// Finish start-up from a stored token.
    ///
    /// The provider becomes ready either way; a stale token just leaves it
    /// logged out.
    pub fn restore(&mut self, token: String, claims: Claims) -> Result<SessionId, AuthError> {
        self.ready = true;
        self.login(Credentials::Bearer { token, claims })
    }

    fn live(&self) -> Option<&TokenSession> {
        let now = (self.clock)();
        self.current
            .as_ref()
            .filter(|c| validate_claims(&c.claims, now).is_ok())
    }
}

impl AuthProvider for ClaimsAuthProvider {
    fn name(&self) -> &'static str {
        "claims"
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn identity(&self) -> Option<&Identity> {
        self.live().map(|c| &c.session.identity)
    }

    fn login(&mut self, credentials: Credentials) -> Result<SessionId, AuthError> {
        let (token, claims) = match credentials {
            Credentials::Bearer { token, claims } => (token, claims),
            other => {
                return Err(AuthError::UnsupportedCredentials {
                    provider: self.name(),
                    kind: other.kind(),
                });
            }
        };

        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken);
        }

        if let Err(err) = validate_claims(&claims, (self.clock)()) {
            tracing::warn!(provider = self.name(), user_id = %claims.sub, error = %err, "token rejected");
            return Err(err.into());
        }

        let session = Session::open(Identity::from(&claims));
        let id = session.id;
        tracing::info!(
            provider = self.name(),
            session_id = %id,
            user_id = %claims.sub,
            expires_at = %claims.expires_at,
            "login succeeded"
        );
        self.ready = true;
        self.current = Some(TokenSession {
            session,
            token,
            claims,
        });
        Ok(id)
    }

    fn logout(&mut self) {
        if let Some(current) = self.current.take() {
            tracing::info!(provider = self.name(), session_id = %current.session.id, "logged out");
        }
    }

    fn token(&self) -> Option<&str> {
        self.live().map(|c| c.token.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend selection
// ─────────────────────────────────────────────────────────────────────────────

/// Which provider the dashboard runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthBackendKind {
    #[default]
    Stub,
    Claims,
}

impl core::str::FromStr for AuthBackendKind {
    type Err = boardroom_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(Self::Stub),
            "claims" => Ok(Self::Claims),
            other => Err(boardroom_core::DomainError::validation(format!(
                "unknown auth backend '{other}' (expected 'stub' or 'claims')"
            ))),
        }
    }
}

/// Closed set of providers, selected from configuration.
#[derive(Debug)]
pub enum AuthBackend {
    Stub(StubAuthProvider),
    Claims(ClaimsAuthProvider),
}

impl AuthBackend {
    pub fn from_kind(kind: AuthBackendKind) -> Self {
        match kind {
            AuthBackendKind::Stub => Self::Stub(StubAuthProvider::new()),
            AuthBackendKind::Claims => Self::Claims(ClaimsAuthProvider::new()),
        }
    }

    pub fn kind(&self) -> AuthBackendKind {
        match self {
            Self::Stub(_) => AuthBackendKind::Stub,
            Self::Claims(_) => AuthBackendKind::Claims,
        }
    }

    fn inner(&self) -> &dyn AuthProvider {
        match self {
            Self::Stub(p) => p,
            Self::Claims(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn AuthProvider {
        match self {
            Self::Stub(p) => p,
            Self::Claims(p) => p,
        }
    }
}

impl AuthProvider for AuthBackend {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn is_ready(&self) -> bool {
        self.inner().is_ready()
    }

    fn identity(&self) -> Option<&Identity> {
        self.inner().identity()
    }

    fn login(&mut self, credentials: Credentials) -> Result<SessionId, AuthError> {
        self.inner_mut().login(credentials)
    }

    fn logout(&mut self) {
        self.inner_mut().logout()
    }

    fn token(&self) -> Option<&str> {
        self.inner().token()
    }
}
