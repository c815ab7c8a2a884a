use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use horta_core::DomainResult;

use crate::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    pub user: User,
}

fn bearer() -> String {
    "bearer".to_string()
}

/// Auth collaborator (the backend's `/auth` endpoints).
///
/// `login` fails with `Auth` on rejected credentials and `Network` when the
/// backend cannot be reached.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, id: &str, password: &str) -> DomainResult<LoginResponse>;
    async fn logout(&self) -> DomainResult<()>;
}
