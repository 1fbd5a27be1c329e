//! Assembles the in-memory repositories, the linker and the workflow.

use std::sync::Arc;

use fieldservice_core::{Translator, Untranslated};
use fieldservice_recurring::RecurringOrderLinker;
use fieldservice_sales::{BaseGeneration, ServiceGenerationWorkflow};

use crate::catalog::{CatalogError, CatalogTranslator};
use crate::config::FieldServiceConfig;
use crate::message_log::InMemoryMessageLog;
use crate::repositories::{
    InMemoryRecurringOrders, InMemoryRecurringTemplates, InMemorySaleLines, NameSequence,
};

/// Field service components backed by in-memory stores (tests/dev).
pub struct InMemoryFieldService {
    pub sale_lines: Arc<InMemorySaleLines>,
    pub templates: Arc<InMemoryRecurringTemplates>,
    pub recurring_orders: Arc<InMemoryRecurringOrders>,
    pub messages: Arc<InMemoryMessageLog>,
    pub linker: Arc<RecurringOrderLinker>,
}

impl InMemoryFieldService {
    pub fn new(config: &FieldServiceConfig) -> Result<Self, CatalogError> {
        let translator: Arc<dyn Translator> = match &config.catalog_path {
            Some(path) => Arc::new(CatalogTranslator::from_path(path)?),
            None => Arc::new(Untranslated),
        };
        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: &FieldServiceConfig, translator: Arc<dyn Translator>) -> Self {
        let sale_lines = Arc::new(InMemorySaleLines::new());
        let templates = Arc::new(InMemoryRecurringTemplates::new());
        let recurring_orders = Arc::new(InMemoryRecurringOrders::new(NameSequence::new(
            config.recurring_prefix.clone(),
            config.recurring_padding,
        )));
        let messages = Arc::new(InMemoryMessageLog::new());

        let linker = RecurringOrderLinker::new(
            recurring_orders.clone(),
            templates.clone(),
            sale_lines.clone(),
            messages.clone(),
        )
        .with_translator(translator, config.lang.clone());

        tracing::debug!(lang = %config.lang, prefix = %config.recurring_prefix, "field service wired");

        Self {
            sale_lines,
            templates,
            recurring_orders,
            messages,
            linker: Arc::new(linker),
        }
    }

    /// A generation workflow running `base`, then the recurring order hook.
    pub fn workflow<B: BaseGeneration>(&self, base: B) -> ServiceGenerationWorkflow<B> {
        ServiceGenerationWorkflow::new(base).with_hook(self.linker.clone())
    }
}
