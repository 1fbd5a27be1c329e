use serde::{Deserialize, Serialize};

use fieldservice_core::{Entity, OrderTemplateId, RecordId, RecurringTemplateId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// How field service work is generated when the product is sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTracking {
    /// Not a field service product.
    #[default]
    No,
    /// One field service order per sales order.
    Sale,
    /// One field service order per sale line.
    Line,
    /// One recurring field service order per sale line.
    Recurring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub service_tracking: ServiceTracking,
    /// Per-product order template; overrides the recurring template's default.
    pub order_template_id: Option<OrderTemplateId>,
    pub recurring_template_id: Option<RecurringTemplateId>,
}

impl Product {
    pub fn new(name: impl Into<String>, service_tracking: ServiceTracking) -> Self {
        Self {
            id: ProductId::new(RecordId::new()),
            name: name.into(),
            service_tracking,
            order_template_id: None,
            recurring_template_id: None,
        }
    }

    pub fn with_order_template(mut self, template: OrderTemplateId) -> Self {
        self.order_template_id = Some(template);
        self
    }

    pub fn with_recurring_template(mut self, template: RecurringTemplateId) -> Self {
        self.recurring_template_id = Some(template);
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.service_tracking == ServiceTracking::Recurring
    }
}

impl Entity for Product {
    type Id = ProductId;
    const MODEL: &'static str = "product.product";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
