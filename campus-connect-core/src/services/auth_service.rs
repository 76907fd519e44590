//! Authentication flows.

use std::sync::Arc;

use campus_connect_backend::{User, VerifyResponse};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{LoginDraft, RegisterDraft};

/// Login, registration, and email verification.
///
/// The only writer of the session: pages read identity, this service
/// changes it.
pub struct AuthService {
    ctx: Arc<ServiceContext>,
}

impl AuthService {
    /// Creates an auth service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Authenticates and starts the session.
    pub async fn login(&self, draft: &LoginDraft) -> CoreResult<User> {
        draft.validate()?;
        let user = self.ctx.backend().login(&draft.to_request()).await?;
        self.ctx.session().sign_in(user.clone()).await;
        Ok(user)
    }

    /// Ends the session.
    pub async fn logout(&self) {
        self.ctx.session().sign_out().await;
    }

    /// Registers a new account. Verification happens out of band via the
    /// emailed token.
    pub async fn register(&self, draft: &RegisterDraft) -> CoreResult<()> {
        draft.validate()?;
        self.ctx.backend().register(&draft.to_request()).await?;
        Ok(())
    }

    /// Confirms an email verification token.
    pub async fn verify_email(&self, token: &str) -> CoreResult<VerifyResponse> {
        Ok(self.ctx.backend().verify_email(token).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::create_test_context;
    use campus_connect_backend::{BackendError, Role};

    #[tokio::test]
    async fn login_starts_session() {
        let (ctx, backend) = create_test_context();
        backend
            .set_login_user(User {
                id: "u1".into(),
                name: "Ada".into(),
                email: "ada@example.org".into(),
                role: Role::Student,
            })
            .await;

        let svc = AuthService::new(Arc::clone(&ctx));
        let draft = LoginDraft {
            email: "ada@example.org".into(),
            password: "secret".into(),
        };
        let user = svc.login(&draft).await.unwrap();
        assert_eq!(user.id, "u1");
        assert!(ctx.session().is_signed_in().await);
    }

    #[tokio::test]
    async fn login_failure_leaves_session_signed_out() {
        let (ctx, backend) = create_test_context();
        backend
            .set_login_error(Some(BackendError::Api {
                status: 401,
                message: Some("Invalid credentials".into()),
            }))
            .await;

        let svc = AuthService::new(Arc::clone(&ctx));
        let draft = LoginDraft {
            email: "ada@example.org".into(),
            password: "wrong".into(),
        };
        let err = svc.login(&draft).await.unwrap_err();
        assert_eq!(err.submission_message(), "Invalid credentials");
        assert!(!ctx.session().is_signed_in().await);
    }

    #[tokio::test]
    async fn login_validates_before_network() {
        let (ctx, _backend) = create_test_context();
        let svc = AuthService::new(ctx);
        let err = svc.login(&LoginDraft::default()).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let (ctx, backend) = create_test_context();
        backend
            .set_login_user(User {
                id: "u1".into(),
                name: "Ada".into(),
                email: "ada@example.org".into(),
                role: Role::Student,
            })
            .await;
        let svc = AuthService::new(Arc::clone(&ctx));
        svc.login(&LoginDraft {
            email: "ada@example.org".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

        svc.logout().await;
        assert!(!ctx.session().is_signed_in().await);
    }
}
