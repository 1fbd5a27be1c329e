//! `fieldservice-auth`: access control boundary for record operations.
//!
//! This crate is intentionally decoupled from storage and transport. Privilege
//! elevation is carried explicitly in an [`AccessContext`]; there is no ambient
//! "superuser" switch.

pub mod authorize;
pub mod permissions;
pub mod principal;

pub use authorize::{authorize, AccessContext, AuthzError};
pub use permissions::Permission;
pub use principal::{CompanyMembership, Principal, PrincipalId};
