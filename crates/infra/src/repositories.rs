//! In-memory implementations of the field service repositories.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use fieldservice_auth::{AccessContext, Permission};
use fieldservice_core::{PersistenceResult, RecurringOrderId, RecurringTemplateId};
use fieldservice_recurring::{
    RecurringOrder, RecurringOrderRepository, RecurringTemplate, RecurringTemplateRepository,
    RecurringValues,
};
use fieldservice_sales::{SaleLine, SaleLineId, SaleLineRepository};

use crate::store::InMemoryRecordStore;

/// Display name generator: prefix followed by a zero-padded counter.
#[derive(Debug)]
pub struct NameSequence {
    prefix: String,
    padding: usize,
    next: AtomicU64,
}

impl NameSequence {
    pub fn new(prefix: impl Into<String>, padding: usize) -> Self {
        Self {
            prefix: prefix.into(),
            padding,
            next: AtomicU64::new(1),
        }
    }

    /// Next name. Numbers consumed by failed writes are not reused.
    pub fn next_name(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}{:0>width$}", self.prefix, n, width = self.padding)
    }
}

#[derive(Debug, Default)]
pub struct InMemorySaleLines {
    store: InMemoryRecordStore<SaleLine>,
}

impl InMemorySaleLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a line without access checks.
    pub fn insert(&self, line: SaleLine) -> PersistenceResult<()> {
        self.store.upsert(line)
    }
}

impl SaleLineRepository for InMemorySaleLines {
    fn get(&self, ctx: &AccessContext, id: &SaleLineId) -> PersistenceResult<SaleLine> {
        ctx.require(&Permission::SALE_LINE_READ)?;
        self.store.get(id)
    }

    fn link_recurring_order(
        &self,
        ctx: &AccessContext,
        id: &SaleLineId,
        recurring_order_id: RecurringOrderId,
    ) -> PersistenceResult<SaleLine> {
        ctx.require(&Permission::SALE_LINE_WRITE)?;
        self.store
            .update(id, |line| line.recurring_order_id = Some(recurring_order_id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRecurringTemplates {
    store: InMemoryRecordStore<RecurringTemplate>,
}

impl InMemoryRecurringTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, template: RecurringTemplate) -> PersistenceResult<()> {
        self.store.upsert(template)
    }
}

impl RecurringTemplateRepository for InMemoryRecurringTemplates {
    fn get(&self, ctx: &AccessContext, id: &RecurringTemplateId) -> PersistenceResult<RecurringTemplate> {
        ctx.require(&Permission::RECURRING_TEMPLATE_READ)?;
        self.store.get(id)
    }
}

/// Recurring orders, with a unique constraint on the originating sale line.
///
/// Counts creations and searches so callers can check round trips.
#[derive(Debug)]
pub struct InMemoryRecurringOrders {
    store: InMemoryRecordStore<RecurringOrder>,
    names: NameSequence,
    creates: AtomicUsize,
    searches: AtomicUsize,
}

impl InMemoryRecurringOrders {
    pub fn new(names: NameSequence) -> Self {
        Self {
            store: InMemoryRecordStore::new(),
            names,
            creates: AtomicUsize::new(0),
            searches: AtomicUsize::new(0),
        }
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    /// All stored recurring orders generated from `sale_line_id`.
    pub fn for_sale_line(&self, sale_line_id: &SaleLineId) -> PersistenceResult<Vec<RecurringOrder>> {
        self.store
            .filter(|r| r.sale_line_id.as_ref() == Some(sale_line_id))
    }

    pub fn len(&self) -> PersistenceResult<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> PersistenceResult<bool> {
        self.store.is_empty()
    }
}

impl Default for InMemoryRecurringOrders {
    fn default() -> Self {
        Self::new(NameSequence::new("RO", 5))
    }
}

impl RecurringOrderRepository for InMemoryRecurringOrders {
    fn create(&self, ctx: &AccessContext, values: RecurringValues) -> PersistenceResult<RecurringOrder> {
        ctx.require(&Permission::RECURRING_CREATE)?;
        let record = RecurringOrder::from_values(RecurringOrderId::new(), self.names.next_name(), values)?;
        let record = self
            .store
            .insert_unique(record, "sale_line_id", |r| r.sale_line_id)?;
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(record)
    }

    fn search_by_sale_lines(
        &self,
        ctx: &AccessContext,
        sale_line_ids: &[SaleLineId],
    ) -> PersistenceResult<Vec<RecurringOrder>> {
        ctx.require(&Permission::RECURRING_READ)?;
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.store.filter(|r| {
            r.sale_line_id
                .is_some_and(|line_id| sale_line_ids.contains(&line_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldservice_auth::Principal;
    use fieldservice_core::{CompanyId, FrequencySetId, LocationId, PersistenceError, RecordId};

    fn ctx(permissions: Vec<Permission>) -> AccessContext {
        AccessContext::new(Principal::new(CompanyId::new(), permissions))
    }

    fn values(sale_line_id: Option<SaleLineId>) -> RecurringValues {
        RecurringValues {
            location_id: Some(LocationId::new()),
            start_date: None,
            template_id: None,
            description: "Lawn care".to_string(),
            max_orders: 0,
            frequency_set_id: Some(FrequencySetId::new()),
            order_template_id: None,
            sale_line_id,
            company_id: CompanyId::new(),
        }
    }

    #[test]
    fn name_sequence_pads_and_increments() {
        let seq = NameSequence::new("RO", 5);
        assert_eq!(seq.next_name(), "RO00001");
        assert_eq!(seq.next_name(), "RO00002");
    }

    #[test]
    fn create_requires_permission_unless_elevated() {
        let repo = InMemoryRecurringOrders::default();
        let user = ctx(vec![]);

        let err = repo.create(&user, values(None)).unwrap_err();
        assert!(matches!(err, PersistenceError::Forbidden(_)));

        let created = repo.create(&user.elevated(), values(None)).unwrap();
        assert_eq!(created.name, "RO00001");
        assert_eq!(repo.create_count(), 1);
    }

    #[test]
    fn second_order_for_the_same_sale_line_is_rejected() {
        let repo = InMemoryRecurringOrders::default();
        let sudo = ctx(vec![]).elevated();
        let line = SaleLineId::new(RecordId::new());

        repo.create(&sudo, values(Some(line))).unwrap();
        let err = repo.create(&sudo, values(Some(line))).unwrap_err();

        assert!(matches!(
            err,
            PersistenceError::UniqueViolation { model: "fsm.recurring", field: "sale_line_id", .. }
        ));
        assert_eq!(repo.for_sale_line(&line).unwrap().len(), 1);
    }

    #[test]
    fn search_returns_only_requested_lines_and_counts_queries() {
        let repo = InMemoryRecurringOrders::default();
        let sudo = ctx(vec![]).elevated();
        let a = SaleLineId::new(RecordId::new());
        let b = SaleLineId::new(RecordId::new());
        repo.create(&sudo, values(Some(a))).unwrap();
        repo.create(&sudo, values(Some(b))).unwrap();
        repo.create(&sudo, values(None)).unwrap();

        let reader = ctx(vec![Permission::RECURRING_READ]);
        let found = repo.search_by_sale_lines(&reader, &[a]).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].sale_line_id, Some(a));
        assert_eq!(repo.search_count(), 1);
    }

    #[test]
    fn linking_a_missing_line_is_not_found() {
        let lines = InMemorySaleLines::new();
        let writer = ctx(vec![Permission::SALE_LINE_WRITE]);
        let err = lines
            .link_recurring_order(&writer, &SaleLineId::new(RecordId::new()), RecurringOrderId::new())
            .unwrap_err();
        assert!(matches!(err, PersistenceError::NotFound { model: "sale.order.line", .. }));
    }

    #[test]
    fn template_read_requires_permission() {
        let templates = InMemoryRecurringTemplates::new();
        let template = RecurringTemplate::new("Weekly");
        let id = template.id;
        templates.insert(template).unwrap();

        assert!(templates.get(&ctx(vec![]), &id).is_err());
        assert_eq!(
            templates
                .get(&ctx(vec![Permission::RECURRING_TEMPLATE_READ]), &id)
                .unwrap()
                .name,
            "Weekly"
        );
    }
}
