//! `boardroom-auth` — roles, seniority and authentication state.
//!
//! This crate is decoupled from rendering and navigation: it answers who the
//! user is and whether their roles are senior enough, nothing more.

pub mod claims;
pub mod explain;
pub mod hierarchy;
pub mod identity;
pub mod provider;
pub mod roles;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use explain::{AccessExplanation, DenialKind, explain_access};
pub use hierarchy::{
    RoleHierarchy, RoleTier, UNKNOWN_HELD_WEIGHT, UNSATISFIABLE_WEIGHT, satisfies, satisfies_any,
    weight_of,
};
pub use identity::Identity;
pub use provider::{
    AuthBackend, AuthBackendKind, AuthError, AuthProvider, ClaimsAuthProvider, Clock, Credentials,
    StubAuthProvider,
};
pub use roles::Role;
