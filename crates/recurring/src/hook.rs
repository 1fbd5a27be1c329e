//! Plugs the linker into the service generation workflow.

use fieldservice_auth::AccessContext;
use fieldservice_sales::{GenerationHook, ServiceLine};

use crate::linker::RecurringOrderLinker;

impl GenerationHook for RecurringOrderLinker {
    fn name(&self) -> &'static str {
        "recurring_orders"
    }

    /// Find or create recurring orders for lines whose product is tracked as
    /// `recurring`. Other lines are left to the base generation.
    fn after_generation(&self, ctx: &AccessContext, lines: &[ServiceLine]) -> anyhow::Result<()> {
        let recurring: Vec<ServiceLine> = lines
            .iter()
            .filter(|l| l.product.is_recurring())
            .cloned()
            .collect();

        if recurring.is_empty() {
            tracing::debug!("no recurring lines");
            return Ok(());
        }

        self.find_or_create_recurring(ctx, &recurring)?;
        Ok(())
    }
}
