//! Find-or-create of the recurring order linked to each sale line.

use std::collections::HashMap;
use std::sync::Arc;

use fieldservice_auth::AccessContext;
use fieldservice_core::{MessageLog, Translator, Untranslated};
use fieldservice_sales::{SaleLineId, SaleLineRepository, ServiceLine};

use crate::derive::derive_values;
use crate::error::RecurringResult;
use crate::messages;
use crate::order::{RecurringOrder, RecurringValues};
use crate::repository::{RecurringOrderRepository, RecurringTemplateRepository};

/// Language used for audit messages unless configured otherwise.
pub const DEFAULT_LANG: &str = "en_US";

pub struct RecurringOrderLinker {
    recurring_orders: Arc<dyn RecurringOrderRepository>,
    templates: Arc<dyn RecurringTemplateRepository>,
    sale_lines: Arc<dyn SaleLineRepository>,
    messages: Arc<dyn MessageLog>,
    translator: Arc<dyn Translator>,
    lang: String,
}

impl RecurringOrderLinker {
    pub fn new(
        recurring_orders: Arc<dyn RecurringOrderRepository>,
        templates: Arc<dyn RecurringTemplateRepository>,
        sale_lines: Arc<dyn SaleLineRepository>,
        messages: Arc<dyn MessageLog>,
    ) -> Self {
        Self {
            recurring_orders,
            templates,
            sale_lines,
            messages,
            translator: Arc::new(Untranslated),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>, lang: impl Into<String>) -> Self {
        self.translator = translator;
        self.lang = lang.into();
        self
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Resolve the product's recurring template and derive the new order's values.
    pub fn prepare_values(&self, ctx: &AccessContext, line: &ServiceLine) -> RecurringResult<RecurringValues> {
        let template = match line.product.recurring_template_id {
            Some(id) => Some(self.templates.get(ctx, &id)?),
            None => None,
        };
        Ok(derive_values(line, template.as_ref()))
    }

    /// Create and link a new recurring order for every line.
    ///
    /// Does not check for an existing link; use [`Self::find_or_create_recurring`]
    /// for that.
    #[tracing::instrument(skip_all, fields(lines = lines.len()))]
    pub fn create_recurring(
        &self,
        ctx: &AccessContext,
        lines: &[ServiceLine],
    ) -> RecurringResult<HashMap<SaleLineId, RecurringOrder>> {
        let mut result = HashMap::with_capacity(lines.len());
        for line in lines {
            let recurring = self.create_one(ctx, line)?;
            result.insert(line.id(), recurring);
        }
        Ok(result)
    }

    /// Return the recurring order linked to every line, creating the missing ones.
    ///
    /// Existing links are looked up with a single search for the whole batch.
    #[tracing::instrument(skip_all, fields(lines = lines.len()))]
    pub fn find_or_create_recurring(
        &self,
        ctx: &AccessContext,
        lines: &[ServiceLine],
    ) -> RecurringResult<HashMap<SaleLineId, RecurringOrder>> {
        let ids: Vec<SaleLineId> = lines.iter().map(ServiceLine::id).collect();
        let mut by_line: HashMap<SaleLineId, RecurringOrder> = self
            .recurring_orders
            .search_by_sale_lines(ctx, &ids)?
            .into_iter()
            .filter_map(|r| r.sale_line_id.map(|line_id| (line_id, r)))
            .collect();
        tracing::debug!(found = by_line.len(), "existing recurring orders");

        let mut result = HashMap::with_capacity(lines.len());
        for line in lines {
            let recurring = match by_line.get(&line.id()) {
                Some(existing) => {
                    let existing = existing.clone();
                    if line.line.recurring_order_id != Some(existing.id) {
                        self.ensure_linked(ctx, line, &existing)?;
                    }
                    tracing::debug!(sale_line_id = %line.id(), recurring_id = %existing.id, "already linked");
                    existing
                }
                None => {
                    let created = self.create_one(ctx, line)?;
                    // the same line may appear twice in one batch
                    by_line.insert(line.id(), created.clone());
                    created
                }
            };
            result.insert(line.id(), recurring);
        }
        Ok(result)
    }

    fn create_one(&self, ctx: &AccessContext, line: &ServiceLine) -> RecurringResult<RecurringOrder> {
        let values = self.prepare_values(ctx, line)?;

        // The salesperson usually cannot create recurring orders directly.
        let sudo = ctx.elevated();
        let recurring = self.recurring_orders.create(&sudo, values)?;
        self.link_and_announce(ctx, line, &recurring)?;

        tracing::info!(
            sale_line_id = %line.id(),
            sale_order = %line.order.name,
            recurring_id = %recurring.id,
            recurring = %recurring.name,
            "recurring order created"
        );
        Ok(recurring)
    }

    /// Finish the link of a stored order whose line was never linked, e.g.
    /// because an earlier run failed after the create.
    ///
    /// The stored line is authoritative: the caller's copy may predate the link.
    fn ensure_linked(
        &self,
        ctx: &AccessContext,
        line: &ServiceLine,
        recurring: &RecurringOrder,
    ) -> RecurringResult<()> {
        let stored = self.sale_lines.get(ctx, &line.id())?;
        if stored.is_linked() {
            if stored.recurring_order_id != Some(recurring.id) {
                tracing::warn!(
                    sale_line_id = %line.id(),
                    recurring_id = %recurring.id,
                    linked_to = ?stored.recurring_order_id,
                    "sale line linked to another recurring order"
                );
            }
            return Ok(());
        }

        self.link_and_announce(ctx, line, recurring)?;
        tracing::info!(
            sale_line_id = %line.id(),
            recurring_id = %recurring.id,
            recurring = %recurring.name,
            "recurring order link restored"
        );
        Ok(())
    }

    /// Store the back-link on the line, then post the audit messages.
    fn link_and_announce(
        &self,
        ctx: &AccessContext,
        line: &ServiceLine,
        recurring: &RecurringOrder,
    ) -> RecurringResult<()> {
        self.sale_lines.link_recurring_order(ctx, &line.id(), recurring.id)?;

        let order_ref = line.order.record_ref();
        let recurring_ref = recurring.record_ref();
        self.messages.post(messages::order_created(
            self.translator.as_ref(),
            &self.lang,
            order_ref.clone(),
            recurring_ref.clone(),
            &line.product.name,
        ))?;
        self.messages.post(messages::recurring_created_from(
            self.translator.as_ref(),
            &self.lang,
            recurring_ref,
            order_ref,
            &line.product.name,
        ))?;
        Ok(())
    }
}
