use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use boardroom_core::{DomainError, DomainResult, ValueObject};

/// Role identifier used for route gating.
///
/// Roles are opaque strings at this layer; their seniority comes from a
/// [`RoleHierarchy`](crate::RoleHierarchy), not from the name itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Regular staff.
    pub const STAFF: Role = Role(Cow::Borrowed("mitarbeiter"));
    /// Middle management.
    pub const MANAGEMENT: Role = Role(Cow::Borrowed("management"));
    /// Executive board.
    pub const EXECUTIVE: Role = Role(Cow::Borrowed("c-level"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Build a role from user-supplied text.
    ///
    /// Every deserialized role (config files, token claims) goes through here.
    /// Surrounding whitespace is dropped; blank names are rejected.
    pub fn parse(name: &str) -> DomainResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("role name must not be empty"));
        }
        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Role {}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0.into_owned()
    }
}

impl From<&'static str> for Role {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
