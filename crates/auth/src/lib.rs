//! `horta-auth` — storefront identity: user records, roles and the session
//! context.
//!
//! Decoupled from HTTP and storage: the backend is reached through
//! [`AuthApi`] and persistence through [`SessionStore`].

pub mod client;
pub mod roles;
pub mod session;
pub mod store;
pub mod user;

pub use client::{AuthApi, LoginResponse};
pub use roles::{NavRole, Role};
pub use session::Session;
pub use store::{InMemorySessionStore, SessionStore};
pub use user::{ApprovalStatus, User};
