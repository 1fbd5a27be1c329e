use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldservice_core::{
    CompanyId, Entity, FrequencySetId, LocationId, OrderTemplateId, PersistenceError,
    PersistenceResult, RecordRef, RecurringOrderId, RecurringTemplateId,
};
use fieldservice_sales::SaleLineId;

/// Field values for a recurring order that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringValues {
    pub location_id: Option<LocationId>,
    pub start_date: Option<DateTime<Utc>>,
    pub template_id: Option<RecurringTemplateId>,
    pub description: String,
    pub max_orders: u32,
    pub frequency_set_id: Option<FrequencySetId>,
    pub order_template_id: Option<OrderTemplateId>,
    pub sale_line_id: Option<SaleLineId>,
    pub company_id: CompanyId,
}

/// A schedule of repeated field service visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringOrder {
    pub id: RecurringOrderId,
    /// Generated display name (e.g. "RO00007").
    pub name: String,
    pub template_id: Option<RecurringTemplateId>,
    pub start_date: Option<DateTime<Utc>>,
    pub location_id: LocationId,
    pub description: String,
    pub max_orders: u32,
    pub frequency_set_id: FrequencySetId,
    pub order_template_id: Option<OrderTemplateId>,
    pub sale_line_id: Option<SaleLineId>,
    pub company_id: CompanyId,
}

impl RecurringOrder {
    /// Build a stored record from values, enforcing the required fields.
    ///
    /// Storage implementations call this after assigning the id and name.
    pub fn from_values(
        id: RecurringOrderId,
        name: impl Into<String>,
        values: RecurringValues,
    ) -> PersistenceResult<Self> {
        let location_id = values
            .location_id
            .ok_or_else(|| PersistenceError::missing_field(Self::MODEL, "location_id"))?;
        let frequency_set_id = values
            .frequency_set_id
            .ok_or_else(|| PersistenceError::missing_field(Self::MODEL, "frequency_set_id"))?;

        Ok(Self {
            id,
            name: name.into(),
            template_id: values.template_id,
            start_date: values.start_date,
            location_id,
            description: values.description,
            max_orders: values.max_orders,
            frequency_set_id,
            order_template_id: values.order_template_id,
            sale_line_id: values.sale_line_id,
            company_id: values.company_id,
        })
    }

    pub fn record_ref(&self) -> RecordRef {
        RecordRef::new(Self::MODEL, *self.id.as_uuid(), self.name.clone())
    }
}

impl Entity for RecurringOrder {
    type Id = RecurringOrderId;
    const MODEL: &'static str = "fsm.recurring";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldservice_core::RecordId;

    fn values() -> RecurringValues {
        RecurringValues {
            location_id: Some(LocationId::new()),
            start_date: Some(Utc::now()),
            template_id: Some(RecurringTemplateId::new()),
            description: "Lawn care".to_string(),
            max_orders: 12,
            frequency_set_id: Some(FrequencySetId::new()),
            order_template_id: None,
            sale_line_id: Some(SaleLineId::new(RecordId::new())),
            company_id: CompanyId::new(),
        }
    }

    #[test]
    fn from_values_copies_every_field() {
        let v = values();
        let id = RecurringOrderId::new();
        let order = RecurringOrder::from_values(id, "RO00001", v.clone()).unwrap();

        assert_eq!(order.id, id);
        assert_eq!(order.name, "RO00001");
        assert_eq!(Some(order.location_id), v.location_id);
        assert_eq!(Some(order.frequency_set_id), v.frequency_set_id);
        assert_eq!(order.start_date, v.start_date);
        assert_eq!(order.template_id, v.template_id);
        assert_eq!(order.max_orders, 12);
        assert_eq!(order.sale_line_id, v.sale_line_id);
        assert_eq!(order.company_id, v.company_id);
    }

    #[test]
    fn missing_location_is_rejected() {
        let mut v = values();
        v.location_id = None;
        let err = RecurringOrder::from_values(RecurringOrderId::new(), "RO00001", v).unwrap_err();
        assert_eq!(
            err,
            PersistenceError::missing_field("fsm.recurring", "location_id")
        );
    }

    #[test]
    fn missing_frequency_set_is_rejected() {
        let mut v = values();
        v.frequency_set_id = None;
        let err = RecurringOrder::from_values(RecurringOrderId::new(), "RO00001", v).unwrap_err();
        assert_eq!(
            err,
            PersistenceError::missing_field("fsm.recurring", "frequency_set_id")
        );
    }

    #[test]
    fn record_ref_uses_recurring_model() {
        let order = RecurringOrder::from_values(RecurringOrderId::new(), "RO00001", values()).unwrap();
        let r = order.record_ref();
        assert_eq!(r.model, "fsm.recurring");
        assert_eq!(&r.id, order.id.as_uuid());
        assert_eq!(r.display_name, "RO00001");
    }
}
