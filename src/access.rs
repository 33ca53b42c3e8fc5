//! Write gating based on the host-provided role capability.
//!
//! Authentication lives outside the engine; hosts hand every call site an
//! opaque [`Role`]. The gate sits at the boundary — call [`ensure_can_write`]
//! before `create`/`update`/`delete`/import — the stores themselves do not
//! re-check.

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Capability level of the current caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full read/write access.
    Admin,
    /// Read-only access.
    User,
}

impl Role {
    pub fn can_write(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Fails with [`LedgerError::PermissionDenied`] when `role` lacks write
/// capability.
pub fn ensure_can_write(role: Role) -> Result<()> {
    if role.can_write() {
        Ok(())
    } else {
        Err(LedgerError::PermissionDenied)
    }
}
