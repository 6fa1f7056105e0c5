//! Protected route table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use boardroom_auth::Role;
use boardroom_core::{DomainError, DomainResult};

/// A route and the roles that may open it (any one is enough).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedRoute {
    pub path: String,
    #[serde(default)]
    pub required_roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ProtectedRoute {
    pub fn new(path: impl Into<String>, required_roles: Vec<Role>) -> Self {
        Self {
            path: path.into(),
            required_roles,
            title: None,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Drop query, fragment and trailing slash: `/finance/?q=1` → `/finance`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Requirements are fixed when the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<ProtectedRoute>,
}

impl RouteTable {
    /// Overview for everyone, management and executive areas above it.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                ProtectedRoute::new("/", vec![Role::STAFF]).titled("Overview"),
                ProtectedRoute::new("/management", vec![Role::MANAGEMENT]).titled("Management"),
                ProtectedRoute::new("/executive", vec![Role::EXECUTIVE]).titled("Executive"),
            ],
        }
    }

    pub fn new(routes: Vec<ProtectedRoute>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(DomainError::validation(format!(
                    "route path '{}' must start with '/'",
                    route.path
                )));
            }
            if normalize_path(&route.path) != route.path {
                return Err(DomainError::validation(format!(
                    "route path '{}' must not carry a trailing slash, query or fragment",
                    route.path
                )));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(DomainError::invariant(format!(
                    "route '{}' is configured twice",
                    route.path
                )));
            }
        }
        Ok(Self { routes })
    }

    /// Look up a route by (un-normalized) path.
    pub fn get(&self, path: &str) -> Option<&ProtectedRoute> {
        let path = normalize_path(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProtectedRoute> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_paths() {
        assert_eq!(normalize_path("/management/"), "/management");
        assert_eq!(normalize_path("/management?tab=kpi#top"), "/management");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("?x"), "/");
    }

    #[test]
    fn lookup_ignores_query_and_trailing_slash() {
        let table = RouteTable::standard();
        let route = table.get("/executive/?year=2024").unwrap();
        assert_eq!(route.required_roles, vec![Role::EXECUTIVE]);
        assert!(table.get("/unknown").is_none());
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(matches!(
            RouteTable::new(vec![ProtectedRoute::new("finance", vec![])]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RouteTable::new(vec![ProtectedRoute::new("/finance/", vec![])]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RouteTable::new(vec![
                ProtectedRoute::new("/finance", vec![]),
                ProtectedRoute::new("/finance", vec![Role::MANAGEMENT]),
            ]),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let route: ProtectedRoute = serde_json::from_str(r#"{"path": "/reports"}"#).unwrap();
        assert!(route.required_roles.is_empty());
        assert!(route.title.is_none());
    }
}
