use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are modeled as opaque strings (e.g. "fieldservice.recurring.read").
/// A special wildcard permission `"*"` grants everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const WILDCARD: Permission = Permission::from_static("*");

    pub const RECURRING_READ: Permission = Permission::from_static("fieldservice.recurring.read");
    pub const RECURRING_CREATE: Permission =
        Permission::from_static("fieldservice.recurring.create");
    pub const RECURRING_TEMPLATE_READ: Permission =
        Permission::from_static("fieldservice.recurring_template.read");
    pub const SALE_LINE_READ: Permission = Permission::from_static("sales.order_line.read");
    pub const SALE_LINE_WRITE: Permission = Permission::from_static("sales.order_line.write");

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
