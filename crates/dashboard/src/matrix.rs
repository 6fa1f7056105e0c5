//! Access matrix: which tier reaches which route.
//!
//! A complete view of the gating configuration for audits and for spotting
//! routes nobody can open.

use serde::Serialize;

use boardroom_auth::RoleHierarchy;

use crate::routes::RouteTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessMatrix {
    pub tiers: Vec<TierAccess>,
    pub routes: Vec<RouteAccess>,
}

/// Routes a user holding only this role can open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierAccess {
    pub role: String,
    pub weight: u32,
    pub routes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteAccess {
    pub path: String,
    pub required_roles: Vec<String>,
    /// Least senior role that gets in; `None` if no tier does.
    pub minimum_role: Option<String>,
}

impl RouteAccess {
    pub fn is_unreachable(&self) -> bool {
        self.minimum_role.is_none()
    }
}

impl AccessMatrix {
    pub fn build(hierarchy: &RoleHierarchy, routes: &RouteTable) -> Self {
        let tiers = hierarchy
            .tiers()
            .map(|tier| TierAccess {
                role: tier.role.to_string(),
                weight: tier.weight,
                routes: routes
                    .iter()
                    .filter(|r| {
                        hierarchy.satisfies_any(std::slice::from_ref(&tier.role), &r.required_roles)
                    })
                    .map(|r| r.path.clone())
                    .collect(),
            })
            .collect();

        let routes = routes
            .iter()
            .map(|r| RouteAccess {
                path: r.path.clone(),
                required_roles: r.required_roles.iter().map(|role| role.to_string()).collect(),
                minimum_role: hierarchy
                    .tiers()
                    .find(|t| {
                        hierarchy.satisfies_any(std::slice::from_ref(&t.role), &r.required_roles)
                    })
                    .map(|t| t.role.to_string()),
            })
            .collect();

        Self { tiers, routes }
    }

    pub fn unreachable_routes(&self) -> impl Iterator<Item = &RouteAccess> {
        self.routes.iter().filter(|r| r.is_unreachable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ProtectedRoute;
    use boardroom_auth::Role;

    #[test]
    fn standard_matrix_is_cumulative() {
        let m = AccessMatrix::build(RoleHierarchy::standard(), &RouteTable::standard());
        let reach: Vec<(&str, usize)> = m
            .tiers
            .iter()
            .map(|t| (t.role.as_str(), t.routes.len()))
            .collect();
        assert_eq!(reach, [("mitarbeiter", 1), ("management", 2), ("c-level", 3)]);

        let exec = m.routes.iter().find(|r| r.path == "/executive").unwrap();
        assert_eq!(exec.minimum_role.as_deref(), Some("c-level"));
        assert_eq!(m.unreachable_routes().count(), 0);
    }

    #[test]
    fn flags_routes_with_unknown_requirements() {
        let routes = RouteTable::new(vec![
            ProtectedRoute::new("/", vec![]),
            ProtectedRoute::new("/admin", vec![Role::new("admin")]),
        ])
        .unwrap();
        let m = AccessMatrix::build(RoleHierarchy::standard(), &routes);

        let open = m.routes.iter().find(|r| r.path == "/").unwrap();
        assert_eq!(open.minimum_role.as_deref(), Some("mitarbeiter"));

        let unreachable: Vec<&str> = m.unreachable_routes().map(|r| r.path.as_str()).collect();
        assert_eq!(unreachable, ["/admin"]);
    }

    #[test]
    fn serializes_to_json() {
        let m = AccessMatrix::build(RoleHierarchy::standard(), &RouteTable::standard());
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["tiers"][2]["routes"][2], "/executive");
    }
}
