//! Role seniority table and the satisfaction rule.
//!
//! A small total order (`mitarbeiter < management < c-level`) lets one senior
//! role cover every less senior requirement. This is deliberately not a
//! permission system: the only question answered here is "is one of the held
//! roles at least as senior as one of the required roles?".

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use boardroom_core::{DomainError, DomainResult};

use crate::Role;

/// Weight of a held role that the hierarchy does not know.
pub const UNKNOWN_HELD_WEIGHT: u32 = 0;

/// Weight of a required role that the hierarchy does not know.
///
/// No configured tier may use it, so an unknown requirement can never be met.
pub const UNSATISFIABLE_WEIGHT: u32 = u32::MAX;

/// One row of the hierarchy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTier {
    pub role: Role,
    pub weight: u32,
}

impl RoleTier {
    pub fn new(role: impl Into<Role>, weight: u32) -> Self {
        Self {
            role: role.into(),
            weight,
        }
    }
}

/// Ordered role → weight table.
///
/// Tiers are kept sorted by ascending weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleHierarchy {
    tiers: Vec<RoleTier>,
}

static STANDARD: LazyLock<RoleHierarchy> = LazyLock::new(|| RoleHierarchy {
    tiers: vec![
        RoleTier::new(Role::STAFF, 1),
        RoleTier::new(Role::MANAGEMENT, 2),
        RoleTier::new(Role::EXECUTIVE, 3),
    ],
});

impl RoleHierarchy {
    /// The three-tier table used by the dashboard unless configured otherwise.
    pub fn standard() -> &'static RoleHierarchy {
        &STANDARD
    }

    /// Build a custom table.
    ///
    /// Rejects empty tables, blank or duplicate role names, zero weights,
    /// duplicate weights and the reserved [`UNSATISFIABLE_WEIGHT`].
    pub fn new(tiers: impl IntoIterator<Item = RoleTier>) -> DomainResult<Self> {
        let mut tiers: Vec<RoleTier> = tiers.into_iter().collect();
        if tiers.is_empty() {
            return Err(DomainError::validation("role hierarchy must not be empty"));
        }

        let mut names = HashSet::new();
        let mut weights = HashSet::new();
        for tier in &tiers {
            if tier.role.as_str().trim().is_empty() {
                return Err(DomainError::validation("role name must not be empty"));
            }
            if tier.weight == UNKNOWN_HELD_WEIGHT {
                return Err(DomainError::validation(format!(
                    "role '{}' must have a positive weight",
                    tier.role
                )));
            }
            if tier.weight == UNSATISFIABLE_WEIGHT {
                return Err(DomainError::validation(format!(
                    "role '{}' uses the reserved weight {}",
                    tier.role, UNSATISFIABLE_WEIGHT
                )));
            }
            if !names.insert(tier.role.as_str()) {
                return Err(DomainError::invariant(format!(
                    "role '{}' appears twice in the hierarchy",
                    tier.role
                )));
            }
            if !weights.insert(tier.weight) {
                return Err(DomainError::invariant(format!(
                    "weight {} is assigned to more than one role",
                    tier.weight
                )));
            }
        }

        tiers.sort_by_key(|t| t.weight);
        Ok(Self { tiers })
    }

    /// Tiers in ascending seniority.
    pub fn tiers(&self) -> impl Iterator<Item = &RoleTier> {
        self.tiers.iter()
    }

    /// Least senior tier.
    pub fn lowest(&self) -> &RoleTier {
        // Construction guarantees at least one tier.
        &self.tiers[0]
    }

    pub fn is_known(&self, role: &Role) -> bool {
        self.tier(role).is_some()
    }

    fn tier(&self, role: &Role) -> Option<&RoleTier> {
        self.tiers.iter().find(|t| t.role == *role)
    }

    /// Weight of a role someone *holds*; unknown roles count as 0.
    pub fn weight_of(&self, role: &Role) -> u32 {
        self.tier(role).map_or(UNKNOWN_HELD_WEIGHT, |t| t.weight)
    }

    /// Weight of a role someone *requires*; unknown roles are unsatisfiable.
    pub fn required_weight(&self, role: &Role) -> u32 {
        self.tier(role).map_or(UNSATISFIABLE_WEIGHT, |t| t.weight)
    }

    /// True iff any held role is at least as senior as `required`.
    pub fn satisfies<'a>(
        &self,
        held: impl IntoIterator<Item = &'a Role>,
        required: &Role,
    ) -> bool {
        let needed = self.required_weight(required);
        held.into_iter().any(|r| self.weight_of(r) >= needed)
    }

    /// True iff `satisfies` holds for at least one required role.
    ///
    /// An empty requirement is vacuously satisfied.
    pub fn satisfies_any(&self, held: &[Role], required: &[Role]) -> bool {
        required.is_empty() || required.iter().any(|r| self.satisfies(held, r))
    }

    /// Most senior known role among `held`.
    pub fn highest<'a>(&self, held: impl IntoIterator<Item = &'a Role>) -> Option<&RoleTier> {
        held.into_iter()
            .filter_map(|r| self.tier(r))
            .max_by_key(|t| t.weight)
    }
}

/// [`RoleHierarchy::weight_of`] against the standard table.
pub fn weight_of(role: &Role) -> u32 {
    RoleHierarchy::standard().weight_of(role)
}

/// [`RoleHierarchy::satisfies`] against the standard table.
pub fn satisfies(held: &[Role], required: &Role) -> bool {
    RoleHierarchy::standard().satisfies(held, required)
}

/// [`RoleHierarchy::satisfies_any`] against the standard table.
pub fn satisfies_any(held: &[Role], required: &[Role]) -> bool {
    RoleHierarchy::standard().satisfies_any(held, required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn known_roles() -> Vec<Role> {
        RoleHierarchy::standard()
            .tiers()
            .map(|t| t.role.clone())
            .collect()
    }

    #[test]
    fn standard_weights() {
        assert_eq!(weight_of(&Role::STAFF), 1);
        assert_eq!(weight_of(&Role::MANAGEMENT), 2);
        assert_eq!(weight_of(&Role::EXECUTIVE), 3);
        assert_eq!(weight_of(&Role::new("praktikant")), UNKNOWN_HELD_WEIGHT);
    }

    #[test]
    fn senior_role_covers_junior_requirement() {
        assert!(satisfies(&[Role::EXECUTIVE], &Role::STAFF));
        assert!(satisfies(&[Role::MANAGEMENT], &Role::MANAGEMENT));
        assert!(!satisfies(&[Role::STAFF], &Role::MANAGEMENT));
    }

    #[test]
    fn unknown_requirement_fails_closed() {
        let everything = known_roles();
        assert!(!satisfies(&everything, &Role::new("admin")));
        assert!(!satisfies_any(&everything, &[Role::new("admin")]));
    }

    #[test]
    fn unknown_held_role_grants_nothing() {
        assert!(!satisfies(&[Role::new("praktikant")], &Role::STAFF));
    }

    #[test]
    fn empty_requirement_is_vacuous() {
        assert!(satisfies_any(&[], &[]));
    }

    #[test]
    fn empty_held_set_satisfies_nothing() {
        assert!(!satisfies_any(&[], &[Role::STAFF]));
    }

    #[test]
    fn any_requirement_is_enough() {
        let required = [Role::EXECUTIVE, Role::MANAGEMENT];
        assert!(satisfies_any(&[Role::MANAGEMENT], &required));
        assert!(!satisfies_any(&[Role::STAFF], &required));
    }

    #[test]
    fn highest_picks_most_senior_known_role() {
        let held = [Role::new("praktikant"), Role::MANAGEMENT, Role::STAFF];
        let top = RoleHierarchy::standard().highest(&held).unwrap();
        assert_eq!(top.role, Role::MANAGEMENT);
        assert!(RoleHierarchy::standard().highest(&[Role::new("x")]).is_none());
    }

    #[test]
    fn custom_table_is_sorted() {
        let h = RoleHierarchy::new([
            RoleTier::new("vorstand", 30),
            RoleTier::new("team", 10),
            RoleTier::new("bereich", 20),
        ])
        .unwrap();
        let order: Vec<&str> = h.tiers().map(|t| t.role.as_str()).collect();
        assert_eq!(order, ["team", "bereich", "vorstand"]);
        assert_eq!(h.lowest().role.as_str(), "team");
    }

    #[test]
    fn custom_table_rejects_bad_rows() {
        assert!(matches!(
            RoleHierarchy::new(Vec::new()),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RoleHierarchy::new([RoleTier::new("team", 0)]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RoleHierarchy::new([RoleTier::new("team", UNSATISFIABLE_WEIGHT)]),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RoleHierarchy::new([RoleTier::new("team", 1), RoleTier::new("team", 2)]),
            Err(DomainError::InvariantViolation(_))
        ));
        assert!(matches!(
            RoleHierarchy::new([RoleTier::new("a", 1), RoleTier::new("b", 1)]),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    fn known_role() -> impl Strategy<Value = Role> {
        prop::sample::select(known_roles())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for known roles, satisfaction is exactly weight comparison.
        #[test]
        fn satisfies_matches_weight_order(held in known_role(), required in known_role()) {
            prop_assert_eq!(
                satisfies(std::slice::from_ref(&held), &required),
                weight_of(&held) >= weight_of(&required)
            );
        }

        /// Property: a requirement outside the table is never met.
        #[test]
        fn unknown_requirement_never_met(
            name in "[a-z]{1,12}",
            held in prop::collection::vec(known_role(), 0..6)
        ) {
            let required = Role::new(name);
            prop_assume!(!RoleHierarchy::standard().is_known(&required));
            prop_assert!(!satisfies(&held, &required));
        }
    }
}
