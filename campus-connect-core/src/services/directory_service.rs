//! Directory lookups.

use std::sync::Arc;

use campus_connect_backend::{Role, UserSummary};

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// User directory: role-scoped contact lists and the teacher subset.
pub struct DirectoryService {
    ctx: Arc<ServiceContext>,
}

impl DirectoryService {
    /// Creates a directory service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// All directory entries with the given role.
    pub async fn contacts_for(&self, role: Role) -> CoreResult<Vec<UserSummary>> {
        Ok(self.ctx.backend().list_users(role).await?)
    }

    /// The teacher subset (chat contact list).
    pub async fn teachers(&self) -> CoreResult<Vec<UserSummary>> {
        Ok(self.ctx.backend().list_teachers().await?)
    }
}
