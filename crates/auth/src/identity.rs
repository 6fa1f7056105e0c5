use serde::{Deserialize, Serialize};

use boardroom_core::UserId;

use crate::{Claims, Role};

/// The authenticated user as the dashboard sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Identity {
    pub fn new(display_name: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id: UserId::new(),
            display_name: display_name.into(),
            email: None,
            roles,
        }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

impl From<&Claims> for Identity {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            display_name: claims.name.clone(),
            email: claims.email.clone(),
            roles: claims.roles.clone(),
        }
    }
}
