use serde::{Deserialize, Deserializer, Serialize};

use crate::Role;

/// Account approval state for wholesale clients.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Suspended,
}

/// Signed-in user record, as returned by the auth collaborator and persisted
/// in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric on some backends, string on others; kept as text.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
    #[serde(default = "default_approval")]
    pub approval_status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
}

fn default_approval() -> ApprovalStatus {
    ApprovalStatus::Pending
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

impl User {
    /// Staff are always treated as approved.
    pub fn is_approved(&self) -> bool {
        self.role.is_staff() || self.approval_status == ApprovalStatus::Approved
    }

    pub fn is_pending(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }

    pub fn is_suspended(&self) -> bool {
        self.approval_status == ApprovalStatus::Suspended
    }

    /// Landing page after login.
    pub fn redirect_path(&self) -> &'static str {
        if self.role.is_staff() {
            "/admin"
        } else if self.approval_status == ApprovalStatus::Approved {
            "/cliente"
        } else {
            "/"
        }
    }
}
