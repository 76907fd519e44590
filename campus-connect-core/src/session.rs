//! Acting-user session.
//!
//! The session is an explicit object handed to each page at construction,
//! never ambient global state. Pages only read the identity;
//! `AuthService` is the sole writer.

use campus_connect_backend::User;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};

/// Holds the authenticated user for the lifetime of the client process.
///
/// Nothing is persisted: signing in fills the slot, signing out clears it.
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<User>>,
}

impl Session {
    /// Creates a signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already holding `user` (e.g. restored by a host
    /// shell).
    #[must_use]
    pub fn with_user(user: User) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// The acting user, if signed in.
    pub async fn current(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    /// The acting user, or [`CoreError::NotLoggedIn`].
    pub async fn require(&self) -> CoreResult<User> {
        self.current().await.ok_or(CoreError::NotLoggedIn)
    }

    /// Stores the authenticated user.
    pub async fn sign_in(&self, user: User) {
        log::info!("Session started for user {}", user.id);
        *self.user.write().await = Some(user);
    }

    /// Clears the session.
    pub async fn sign_out(&self) {
        if let Some(user) = self.user.write().await.take() {
            log::info!("Session ended for user {}", user.id);
        }
    }

    /// Whether a user is signed in.
    pub async fn is_signed_in(&self) -> bool {
        self.user.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_connect_backend::Role;

    fn user() -> User {
        User {
            id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.org".into(),
            role: Role::Student,
        }
    }

    #[tokio::test]
    async fn sign_in_and_out() {
        let session = Session::new();
        assert!(!session.is_signed_in().await);
        assert!(matches!(
            session.require().await,
            Err(CoreError::NotLoggedIn)
        ));

        session.sign_in(user()).await;
        assert_eq!(session.require().await.unwrap().id, "u1");

        session.sign_out().await;
        assert!(session.current().await.is_none());
    }

    #[tokio::test]
    async fn with_user_starts_signed_in() {
        let session = Session::with_user(user());
        assert!(session.is_signed_in().await);
    }
}
