//! `fieldservice-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the field service
//! crates: identifiers, errors, record references and the audit message model.
//! Storage and transport live elsewhere.

pub mod entity;
pub mod error;
pub mod i18n;
pub mod id;
pub mod message;
pub mod record;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, PersistenceError, PersistenceResult};
pub use i18n::{Translator, Untranslated};
pub use id::{
    CompanyId, FrequencySetId, LocationId, MessageId, OrderTemplateId, RecordId,
    RecurringOrderId, RecurringTemplateId,
};
pub use message::{Message, MessageLog};
pub use record::{escape_html, RecordRef};
