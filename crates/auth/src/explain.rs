//! Access explanation (audit trail).
//!
//! Answers "why was this user let in / sent away?" with the same rule the
//! gate uses, plus enough context to fix a denial.

use serde::Serialize;

use crate::{Role, RoleHierarchy, UNSATISFIABLE_WEIGHT};

/// Detailed explanation of an access decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// Roles the route asks for (any one is enough).
    pub required_roles: Vec<String>,

    /// Whether access was granted.
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Details about the held roles.
    pub holder: HolderState,

    /// If denied, this explains what was missing.
    pub denial_reason: Option<DenialReason>,
}

/// Roles the user holds, with the weights the hierarchy assigns them.
#[derive(Debug, Clone, Serialize)]
pub struct HolderState {
    pub roles: Vec<WeightedRole>,
    pub highest_role: Option<String>,
    pub unknown_roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedRole {
    pub role: String,
    pub weight: u32,
}

/// Detailed reason why access was denied.
#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    /// Every required role is missing from the hierarchy.
    UnknownRequirement,
    /// Known requirement, but no held role is senior enough.
    InsufficientSeniority,
}

/// Explain whether `held` satisfies any of `required` under `hierarchy`.
///
/// `granted` always agrees with [`RoleHierarchy::satisfies_any`].
pub fn explain_access(
    hierarchy: &RoleHierarchy,
    held: &[Role],
    required: &[Role],
) -> AccessExplanation {
    let holder = HolderState {
        roles: held
            .iter()
            .map(|r| WeightedRole {
                role: r.as_str().to_string(),
                weight: hierarchy.weight_of(r),
            })
            .collect(),
        highest_role: hierarchy.highest(held).map(|t| t.role.as_str().to_string()),
        unknown_roles: held
            .iter()
            .filter(|r| !hierarchy.is_known(r))
            .map(|r| r.as_str().to_string())
            .collect(),
    };
    let required_roles: Vec<String> = required.iter().map(|r| r.as_str().to_string()).collect();

    if required.is_empty() {
        return AccessExplanation {
            required_roles,
            granted: true,
            reason: "Route has no role requirement".to_string(),
            holder,
            denial_reason: None,
        };
    }

    if let Some(hit) = required.iter().find(|r| hierarchy.satisfies(held, r)) {
        let needed = hierarchy.required_weight(hit);
        let (by, by_weight) = held
            .iter()
            .map(|r| (r.as_str(), hierarchy.weight_of(r)))
            .filter(|(_, w)| *w >= needed)
            .max_by_key(|(_, w)| *w)
            .unwrap_or_default();

        return AccessExplanation {
            required_roles,
            granted: true,
            reason: format!(
                "Role '{}' (weight {}) meets required role '{}' (weight {})",
                by, by_weight, hit, needed
            ),
            holder,
            denial_reason: None,
        };
    }

    let known_required: Vec<&Role> = required.iter().filter(|r| hierarchy.is_known(r)).collect();

    if known_required.is_empty() {
        return AccessExplanation {
            reason: format!(
                "None of the required roles {:?} exist in the hierarchy (weight {})",
                required_roles, UNSATISFIABLE_WEIGHT
            ),
            required_roles,
            granted: false,
            holder,
            denial_reason: Some(DenialReason {
                kind: DenialKind::UnknownRequirement,
                message: "Route requires roles the hierarchy does not define".to_string(),
                suggestions: vec![
                    "Check the route configuration for typos in role names".to_string(),
                    "Add the role to the hierarchy table if it is meant to exist".to_string(),
                ],
            }),
        };
    }

    // Cheapest known requirement: the role a user would need at minimum.
    let easiest = known_required
        .iter()
        .min_by_key(|r| hierarchy.required_weight(r))
        .map(|r| r.as_str().to_string())
        .unwrap_or_default();

    let mut suggestions = vec![format!(
        "Grant role '{}' or a more senior one",
        easiest
    )];
    if !holder.unknown_roles.is_empty() {
        suggestions.push(format!(
            "Roles {:?} are not in the hierarchy and count as weight 0",
            holder.unknown_roles
        ));
    }

    AccessExplanation {
        reason: format!(
            "No held role is at least as senior as any of {:?}",
            required_roles
        ),
        required_roles,
        granted: false,
        holder,
        denial_reason: Some(DenialReason {
            kind: DenialKind::InsufficientSeniority,
            message: format!("Requires at least role '{}'", easiest),
            suggestions,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> &'static RoleHierarchy {
        RoleHierarchy::standard()
    }

    #[test]
    fn granted_names_the_covering_role() {
        let e = explain_access(standard(), &[Role::EXECUTIVE], &[Role::STAFF]);
        assert!(e.granted);
        assert!(e.reason.contains("'c-level' (weight 3)"));
        assert!(e.reason.contains("'mitarbeiter' (weight 1)"));
        assert_eq!(e.holder.highest_role.as_deref(), Some("c-level"));
        assert!(e.denial_reason.is_none());
    }

    #[test]
    fn insufficient_seniority_suggests_minimum_role() {
        let held = [Role::STAFF, Role::new("praktikant")];
        let e = explain_access(standard(), &held, &[Role::EXECUTIVE, Role::MANAGEMENT]);
        assert!(!e.granted);
        let denial = e.denial_reason.unwrap();
        assert_eq!(denial.kind, DenialKind::InsufficientSeniority);
        assert_eq!(denial.message, "Requires at least role 'management'");
        assert_eq!(denial.suggestions.len(), 2);
        assert_eq!(e.holder.unknown_roles, vec!["praktikant".to_string()]);
        assert_eq!(
            e.holder.roles[1],
            WeightedRole {
                role: "praktikant".to_string(),
                weight: 0
            }
        );
    }

    #[test]
    fn unknown_requirement_is_called_out() {
        let e = explain_access(standard(), &[Role::EXECUTIVE], &[Role::new("admin")]);
        assert!(!e.granted);
        assert_eq!(
            e.denial_reason.map(|d| d.kind),
            Some(DenialKind::UnknownRequirement)
        );
    }

    #[test]
    fn empty_requirement_is_granted() {
        let e = explain_access(standard(), &[], &[]);
        assert!(e.granted);
        assert!(e.holder.highest_role.is_none());
    }

    #[test]
    fn serializes_denial_kind_in_snake_case() {
        let e = explain_access(standard(), &[], &[Role::STAFF]);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["denial_reason"]["kind"], "insufficient_seniority");
        assert_eq!(json["granted"], false);
    }
}
