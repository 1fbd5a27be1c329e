use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fieldservice_core::CompanyId;

use crate::Permission;

/// Identity of an authenticated principal (human user, service account, etc).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PrincipalId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for PrincipalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A principal's membership in a company: which permissions are granted there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMembership {
    pub company_id: CompanyId,
    pub permissions: Vec<Permission>,
}

/// A fully resolved principal for authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub active_company_id: CompanyId,
    pub membership: CompanyMembership,
}

impl Principal {
    /// Principal acting in `company_id` with the given permissions there.
    pub fn new(company_id: CompanyId, permissions: Vec<Permission>) -> Self {
        Self {
            principal_id: PrincipalId::new(),
            active_company_id: company_id,
            membership: CompanyMembership {
                company_id,
                permissions,
            },
        }
    }
}
