//! Session context: who is signed in, passed explicitly to whatever needs it.

use std::sync::{Arc, RwLock};

use horta_core::{DomainError, DomainResult};

use crate::client::AuthApi;
use crate::roles::NavRole;
use crate::store::{SessionStore, TOKEN_KEY, USER_KEY};
use crate::{Role, User};

pub const MISSING_TOKEN: &str = "Servidor não retornou token de autenticação";

#[derive(Debug, Clone)]
struct Signed {
    token: String,
    user: User,
}

/// Identity for the current visitor.
///
/// Built once with [`Session::init`], which restores a persisted sign-in.
/// `login` writes the token and user record through to the store; `logout`
/// clears both.
pub struct Session {
    store: Arc<dyn SessionStore>,
    api: Arc<dyn AuthApi>,
    signed: RwLock<Option<Signed>>,
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.current_user().map(|u| u.username))
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Restore from the store. A token without a user record (or the reverse),
    /// or a record that no longer parses, is discarded.
    pub fn init(store: Arc<dyn SessionStore>, api: Arc<dyn AuthApi>) -> Self {
        let signed = Self::restore(store.as_ref());
        if signed.is_none() {
            store.remove(TOKEN_KEY);
            store.remove(USER_KEY);
        }
        Self {
            store,
            api,
            signed: RwLock::new(signed),
        }
    }

    fn restore(store: &dyn SessionStore) -> Option<Signed> {
        let token = store.get(TOKEN_KEY)?;
        let record = store.get(USER_KEY)?;
        match serde_json::from_str::<User>(&record) {
            Ok(user) => Some(Signed { token, user }),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session record");
                None
            }
        }
    }

    pub async fn login(&self, id: &str, password: &str) -> DomainResult<User> {
        let response = self.api.login(id, password).await.inspect_err(|err| {
            tracing::warn!(user = id, error = %err, "login failed");
        })?;

        if response.access_token.is_empty() {
            return Err(DomainError::auth(MISSING_TOKEN));
        }

        let record = serde_json::to_string(&response.user)
            .map_err(|e| DomainError::auth(format!("unserializable user record: {e}")))?;
        self.store.set(TOKEN_KEY, response.access_token.clone());
        self.store.set(USER_KEY, record);

        tracing::info!(user = %response.user.username, role = %response.user.role, "signed in");

        let user = response.user.clone();
        *self.signed.write().unwrap_or_else(|e| e.into_inner()) = Some(Signed {
            token: response.access_token,
            user: response.user,
        });
        Ok(user)
    }

    /// Tell the backend, then forget the sign-in locally even if the backend
    /// call failed.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!(error = %err, "backend logout failed; clearing local session anyway");
        }
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        *self.signed.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn with_signed<T>(&self, f: impl FnOnce(Option<&Signed>) -> T) -> T {
        let guard = self.signed.read().unwrap_or_else(|e| e.into_inner());
        f(guard.as_ref())
    }

    pub fn current_user(&self) -> Option<User> {
        self.with_signed(|s| s.map(|s| s.user.clone()))
    }

    pub fn token(&self) -> Option<String> {
        self.with_signed(|s| s.map(|s| s.token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.with_signed(|s| s.is_some())
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.with_signed(|s| s.is_some_and(|s| &s.user.role == role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::Admin)
    }

    pub fn is_consultor(&self) -> bool {
        self.has_role(&Role::Consultor)
    }

    pub fn is_approved(&self) -> bool {
        self.with_signed(|s| s.is_some_and(|s| s.user.is_approved()))
    }

    pub fn is_pending(&self) -> bool {
        self.with_signed(|s| s.is_some_and(|s| s.user.is_pending()))
    }

    pub fn is_suspended(&self) -> bool {
        self.with_signed(|s| s.is_some_and(|s| s.user.is_suspended()))
    }

    pub fn nav_role(&self) -> NavRole {
        self.with_signed(|s| s.map_or(NavRole::Guest, |s| NavRole::from(&s.user.role)))
    }

    /// Where to send the visitor: the user's landing page, or `/` for guests.
    pub fn redirect_path(&self) -> &'static str {
        self.with_signed(|s| s.map_or("/", |s| s.user.redirect_path()))
    }
}
