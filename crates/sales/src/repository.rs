use std::sync::Arc;

use fieldservice_auth::AccessContext;
use fieldservice_core::{PersistenceResult, RecurringOrderId};

use crate::line::{SaleLine, SaleLineId};

/// Storage seam for sale lines.
pub trait SaleLineRepository: Send + Sync {
    fn get(&self, ctx: &AccessContext, id: &SaleLineId) -> PersistenceResult<SaleLine>;

    /// Store the back-link from a line to the recurring order generated for it.
    fn link_recurring_order(
        &self,
        ctx: &AccessContext,
        id: &SaleLineId,
        recurring_order_id: RecurringOrderId,
    ) -> PersistenceResult<SaleLine>;
}

impl<S> SaleLineRepository for Arc<S>
where
    S: SaleLineRepository + ?Sized,
{
    fn get(&self, ctx: &AccessContext, id: &SaleLineId) -> PersistenceResult<SaleLine> {
        (**self).get(ctx, id)
    }

    fn link_recurring_order(
        &self,
        ctx: &AccessContext,
        id: &SaleLineId,
        recurring_order_id: RecurringOrderId,
    ) -> PersistenceResult<SaleLine> {
        (**self).link_recurring_order(ctx, id, recurring_order_id)
    }
}
