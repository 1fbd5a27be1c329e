use std::sync::Arc;

use fieldservice_auth::AccessContext;
use fieldservice_core::{PersistenceResult, RecurringTemplateId};
use fieldservice_sales::SaleLineId;

use crate::order::{RecurringOrder, RecurringValues};
use crate::template::RecurringTemplate;

/// Storage seam for recurring orders.
pub trait RecurringOrderRepository: Send + Sync {
    /// Store a new recurring order. The store assigns the id and display name.
    fn create(&self, ctx: &AccessContext, values: RecurringValues) -> PersistenceResult<RecurringOrder>;

    /// All recurring orders generated from any of `sale_line_ids`, in one query.
    fn search_by_sale_lines(
        &self,
        ctx: &AccessContext,
        sale_line_ids: &[SaleLineId],
    ) -> PersistenceResult<Vec<RecurringOrder>>;
}

/// Read access to recurring templates.
pub trait RecurringTemplateRepository: Send + Sync {
    fn get(&self, ctx: &AccessContext, id: &RecurringTemplateId) -> PersistenceResult<RecurringTemplate>;
}

impl<S> RecurringOrderRepository for Arc<S>
where
    S: RecurringOrderRepository + ?Sized,
{
    fn create(&self, ctx: &AccessContext, values: RecurringValues) -> PersistenceResult<RecurringOrder> {
        (**self).create(ctx, values)
    }

    fn search_by_sale_lines(
        &self,
        ctx: &AccessContext,
        sale_line_ids: &[SaleLineId],
    ) -> PersistenceResult<Vec<RecurringOrder>> {
        (**self).search_by_sale_lines(ctx, sale_line_ids)
    }
}

impl<S> RecurringTemplateRepository for Arc<S>
where
    S: RecurringTemplateRepository + ?Sized,
{
    fn get(&self, ctx: &AccessContext, id: &RecurringTemplateId) -> PersistenceResult<RecurringTemplate> {
        (**self).get(ctx, id)
    }
}
