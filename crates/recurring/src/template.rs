use serde::{Deserialize, Serialize};

use fieldservice_core::{CompanyId, Entity, FrequencySetId, OrderTemplateId, RecurringTemplateId};

/// Defaults applied to recurring orders generated for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTemplate {
    pub id: RecurringTemplateId,
    pub name: String,
    pub description: Option<String>,
    /// Maximum number of orders to generate; 0 means unlimited.
    pub max_orders: u32,
    pub frequency_set_id: Option<FrequencySetId>,
    pub order_template_id: Option<OrderTemplateId>,
    pub company_id: Option<CompanyId>,
}

impl RecurringTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RecurringTemplateId::new(),
            name: name.into(),
            description: None,
            max_orders: 0,
            frequency_set_id: None,
            order_template_id: None,
            company_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_max_orders(mut self, max_orders: u32) -> Self {
        self.max_orders = max_orders;
        self
    }

    pub fn with_frequency_set(mut self, frequency_set_id: FrequencySetId) -> Self {
        self.frequency_set_id = Some(frequency_set_id);
        self
    }

    pub fn with_order_template(mut self, order_template_id: OrderTemplateId) -> Self {
        self.order_template_id = Some(order_template_id);
        self
    }
}

impl Entity for RecurringTemplate {
    type Id = RecurringTemplateId;
    const MODEL: &'static str = "fsm.recurring.template";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
