use serde::{Deserialize, Serialize};

/// Role of a storefront account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Consultor,
    Cliente,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Consultor => "consultor",
            Role::Cliente => "cliente",
        }
    }

    /// Staff roles get the back-office menu and are never pending approval.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Consultor)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which navigation a visitor sees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavRole {
    Guest,
    Client,
    Admin,
}

impl From<&Role> for NavRole {
    fn from(role: &Role) -> Self {
        if role.is_staff() {
            NavRole::Admin
        } else {
            NavRole::Client
        }
    }
}
