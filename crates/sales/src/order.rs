use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldservice_core::{CompanyId, Entity, LocationId, RecordId, RecordRef};

/// Sales order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleOrderId(pub RecordId);

impl SaleOrderId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SaleOrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Sales order header, as read by the field service flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    pub id: SaleOrderId,
    /// Display name (e.g. "S00042").
    pub name: String,
    pub company_id: CompanyId,
    /// Where the field service work takes place.
    pub location_id: Option<LocationId>,
    /// Expected fulfillment date.
    pub expected_date: Option<DateTime<Utc>>,
}

impl SaleOrder {
    pub fn new(name: impl Into<String>, company_id: CompanyId) -> Self {
        Self {
            id: SaleOrderId::new(RecordId::new()),
            name: name.into(),
            company_id,
            location_id: None,
            expected_date: None,
        }
    }

    pub fn with_location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn with_expected_date(mut self, expected_date: DateTime<Utc>) -> Self {
        self.expected_date = Some(expected_date);
        self
    }

    pub fn record_ref(&self) -> RecordRef {
        RecordRef::new(Self::MODEL, *self.id.0.as_uuid(), self.name.clone())
    }
}

impl Entity for SaleOrder {
    type Id = SaleOrderId;
    const MODEL: &'static str = "sale.order";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
