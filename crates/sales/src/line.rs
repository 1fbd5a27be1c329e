use serde::{Deserialize, Serialize};

use fieldservice_core::{CompanyId, DomainError, DomainResult, Entity, RecordId, RecurringOrderId};
use fieldservice_products::{Product, ProductId};

use crate::order::{SaleOrder, SaleOrderId};

/// Sale line identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleLineId(pub RecordId);

impl SaleLineId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SaleLineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One product row on a customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: SaleLineId,
    pub order_id: SaleOrderId,
    pub product_id: ProductId,
    pub company_id: CompanyId,
    /// Free-text description of the line.
    pub name: String,
    pub quantity: i64,
    /// Recurring order generated from this line, once linked.
    pub recurring_order_id: Option<RecurringOrderId>,
}

impl SaleLine {
    /// A new, unlinked line of `quantity` units of `product` on `order`.
    pub fn new(order: &SaleOrder, product: &Product, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: SaleLineId::new(RecordId::new()),
            order_id: order.id,
            product_id: product.id,
            company_id: order.company_id,
            name: name.into(),
            quantity,
            recurring_order_id: None,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.recurring_order_id.is_some()
    }
}

impl Entity for SaleLine {
    type Id = SaleLineId;
    const MODEL: &'static str = "sale.order.line";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A sale line resolved together with its order and product.
///
/// This is what generation hooks receive, so they can read through the line
/// without further lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLine {
    pub line: SaleLine,
    pub order: SaleOrder,
    pub product: Product,
}

impl ServiceLine {
    pub fn new(line: SaleLine, order: SaleOrder, product: Product) -> DomainResult<Self> {
        if line.order_id != order.id {
            return Err(DomainError::validation(format!(
                "sale line {} does not belong to order {}",
                line.id, order.id
            )));
        }
        if line.product_id != product.id {
            return Err(DomainError::validation(format!(
                "sale line {} does not sell product {}",
                line.id, product.id
            )));
        }
        Ok(Self {
            line,
            order,
            product,
        })
    }

    pub fn id(&self) -> SaleLineId {
        self.line.id
    }
}
