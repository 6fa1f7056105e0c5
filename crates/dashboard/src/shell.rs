//! Application shell: ties configuration, auth, gates and formatting together.

use boardroom_auth::{AccessExplanation, AuthBackend, AuthProvider, RoleHierarchy, explain_access};
use boardroom_core::DomainResult;
use boardroom_i18n::{FormatError, NumberFormatter};

use crate::config::DashboardConfig;
use crate::gate::{Rendered, RoleGate};
use crate::matrix::AccessMatrix;
use crate::navigation::Navigator;
use crate::routes::{RouteTable, normalize_path};

/// The dashboard as a whole.
///
/// Paths missing from the route table still require a logged-in user; only
/// the login page is public.
#[derive(Debug)]
pub struct Dashboard<A: AuthProvider> {
    hierarchy: RoleHierarchy,
    routes: RouteTable,
    formatter: NumberFormatter,
    locale: String,
    login_path: String,
    fallback_path: String,
    auth: A,
}

impl Dashboard<AuthBackend> {
    /// Build with the provider named in the configuration.
    pub fn from_config(config: &DashboardConfig) -> DomainResult<Self> {
        Self::with_provider(config, AuthBackend::from_kind(config.auth_backend))
    }
}

impl<A: AuthProvider> Dashboard<A> {
    pub fn with_provider(config: &DashboardConfig, auth: A) -> DomainResult<Self> {
        config.validate()?;
        tracing::info!(
            locale = %config.locale,
            provider = auth.name(),
            routes = config.routes.len(),
            "dashboard configured"
        );
        Ok(Self {
            hierarchy: config.role_hierarchy()?,
            routes: config.route_table()?,
            formatter: NumberFormatter::new(config.precision),
            locale: config.locale.clone(),
            login_path: normalize_path(&config.login_path).to_string(),
            fallback_path: normalize_path(&config.fallback_path).to_string(),
            auth,
        })
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut A {
        &mut self.auth
    }

    pub fn hierarchy(&self) -> &RoleHierarchy {
        &self.hierarchy
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Gate guarding `path` under the configured login and fallback pages.
    pub fn gate_for(&self, path: &str) -> RoleGate {
        let required = self
            .routes
            .get(path)
            .map(|r| r.required_roles.clone())
            .unwrap_or_default();
        RoleGate::new(required)
            .with_login_path(self.login_path.clone())
            .with_fallback_path(self.fallback_path.clone())
    }

    /// Render `path`, redirecting through `nav` when the gate says so.
    pub fn visit<N, T>(&self, path: &str, nav: &mut N, content: impl FnOnce() -> T) -> Rendered<T>
    where
        N: Navigator + ?Sized,
    {
        if normalize_path(path) == self.login_path {
            return Rendered::Content(content());
        }
        self.gate_for(path).render(&self.auth, &self.hierarchy, nav, content)
    }

    /// Why the current user may or may not open `path`.
    pub fn explain(&self, path: &str) -> AccessExplanation {
        let required = self
            .routes
            .get(path)
            .map(|r| r.required_roles.as_slice())
            .unwrap_or_default();
        explain_access(&self.hierarchy, self.auth.roles(), required)
    }

    pub fn access_matrix(&self) -> AccessMatrix {
        AccessMatrix::build(&self.hierarchy, &self.routes)
    }

    pub fn format_money_compact(&self, value: f64) -> Result<String, FormatError> {
        self.formatter.format_money_compact(value, &self.locale)
    }

    pub fn format_money_full(&self, value: f64) -> Result<String, FormatError> {
        self.formatter.format_money_full(value, &self.locale)
    }

    pub fn format_percent(&self, value: f64) -> Result<String, FormatError> {
        self.formatter.format_percent(value, &self.locale)
    }

    pub fn format_year(&self, value: f64) -> Result<String, FormatError> {
        self.formatter.format_year(value, &self.locale)
    }
}
