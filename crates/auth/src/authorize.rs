use thiserror::Error;

use fieldservice_core::PersistenceError;

use crate::{Permission, Principal, PrincipalId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("company mismatch")]
    CompanyMismatch,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

impl From<AuthzError> for PersistenceError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::CompanyMismatch => PersistenceError::Forbidden("company mismatch".to_string()),
            AuthzError::Forbidden(permission) => {
                PersistenceError::Forbidden(format!("missing permission '{permission}'"))
            }
        }
    }
}

/// Authorize a principal within its active company context.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(principal: &Principal, required: &Permission) -> Result<(), AuthzError> {
    if principal.active_company_id != principal.membership.company_id {
        return Err(AuthzError::CompanyMismatch);
    }

    let granted = principal
        .membership
        .permissions
        .iter()
        .any(|p| p.is_wildcard() || p == required);

    if granted {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}

/// The identity and privilege level a repository call runs with.
///
/// Elevation is explicit: [`AccessContext::elevated`] returns a new context and
/// leaves the caller's context untouched. An elevated context bypasses
/// permission checks but keeps the acting principal for attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessContext {
    principal: Principal,
    elevated: bool,
}

impl AccessContext {
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            elevated: false,
        }
    }

    /// Same principal, with permission checks bypassed.
    pub fn elevated(&self) -> Self {
        Self {
            principal: self.principal.clone(),
            elevated: true,
        }
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal.principal_id
    }

    /// Check `required` unless the context is elevated.
    pub fn require(&self, required: &Permission) -> Result<(), AuthzError> {
        if self.elevated {
            tracing::trace!(
                principal_id = %self.principal.principal_id,
                permission = %required,
                "permission check bypassed (elevated)"
            );
            return Ok(());
        }
        authorize(&self.principal, required)
    }
}
