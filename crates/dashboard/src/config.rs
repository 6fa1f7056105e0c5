//! Dashboard configuration.
//!
//! Read from a JSON file named by `BOARDROOM_CONFIG` (defaults apply when the
//! variable is unset), then patched by individual environment variables.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use boardroom_auth::{AuthBackendKind, RoleHierarchy, RoleTier};
use boardroom_core::{DomainError, DomainResult};
use boardroom_i18n::{Precision, resolve_str};
use boardroom_observability::LogConfig;

use crate::gate::{DEFAULT_FALLBACK_PATH, DEFAULT_LOGIN_PATH};
use crate::matrix::AccessMatrix;
use crate::routes::{ProtectedRoute, RouteTable, normalize_path};

pub const CONFIG_PATH_ENV: &str = "BOARDROOM_CONFIG";
pub const LOCALE_ENV: &str = "BOARDROOM_LOCALE";
pub const AUTH_BACKEND_ENV: &str = "BOARDROOM_AUTH_BACKEND";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Locale used for every formatted figure.
    pub locale: String,
    pub login_path: String,
    /// Where users without a senior enough role are sent.
    pub fallback_path: String,
    pub auth_backend: AuthBackendKind,
    /// Custom hierarchy; the standard three tiers when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<Vec<RoleTier>>,
    pub routes: Vec<ProtectedRoute>,
    pub precision: Precision,
    pub log: LogConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: "de-DE".to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
            auth_backend: AuthBackendKind::default(),
            hierarchy: None,
            routes: RouteTable::standard().iter().cloned().collect(),
            precision: Precision::default(),
            log: LogConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `env` as the environment lookup.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = match env(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(locale) = env(LOCALE_ENV) {
            config.locale = locale;
        }
        if let Some(backend) = env(AUTH_BACKEND_ENV) {
            config.auth_backend = backend
                .parse()
                .with_context(|| format!("invalid {AUTH_BACKEND_ENV}"))?;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dashboard config at {:?}", path))?;
        Self::from_json_str(&raw).with_context(|| format!("invalid dashboard config at {:?}", path))
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse dashboard config JSON")
    }

    /// The configured hierarchy, or a copy of the standard one.
    pub fn role_hierarchy(&self) -> DomainResult<RoleHierarchy> {
        match &self.hierarchy {
            Some(tiers) => RoleHierarchy::new(tiers.iter().cloned()),
            None => Ok(RoleHierarchy::standard().clone()),
        }
    }

    pub fn route_table(&self) -> DomainResult<RouteTable> {
        RouteTable::new(self.routes.clone())
    }

    /// Check everything that would otherwise surface as a broken page.
    pub fn validate(&self) -> DomainResult<()> {
        for (name, path) in [("login_path", &self.login_path), ("fallback_path", &self.fallback_path)] {
            if !path.starts_with('/') {
                return Err(DomainError::validation(format!(
                    "{name} '{path}' must start with '/'"
                )));
            }
        }

        if normalize_path(&self.login_path) == normalize_path(&self.fallback_path) {
            return Err(DomainError::invariant(format!(
                "fallback path '{}' must differ from the login path",
                self.fallback_path
            )));
        }

        resolve_str(&self.locale)
            .map_err(|e| DomainError::validation(format!("locale: {e}")))?;
        self.precision.validate()?;

        let hierarchy = self.role_hierarchy()?;
        let routes = self.route_table()?;

        if routes.get(&self.login_path).is_some() {
            return Err(DomainError::invariant(format!(
                "login path '{}' must not be a protected route",
                self.login_path
            )));
        }

        // A fallback the lowest tier cannot open would bounce forbidden users forever.
        if let Some(fallback) = routes.get(&self.fallback_path) {
            let lowest = std::slice::from_ref(&hierarchy.lowest().role);
            if !hierarchy.satisfies_any(lowest, &fallback.required_roles) {
                return Err(DomainError::invariant(format!(
                    "fallback path '{}' is not reachable by the lowest role '{}'",
                    self.fallback_path,
                    hierarchy.lowest().role
                )));
            }
        }

        for route in AccessMatrix::build(&hierarchy, &routes).unreachable_routes() {
            tracing::warn!(
                path = %route.path,
                required = ?route.required_roles,
                "route requires roles outside the hierarchy and can never be opened"
            );
        }

        Ok(())
    }
}
