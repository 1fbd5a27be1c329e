//! Infrastructure layer: in-memory storage, configuration, wiring.

pub mod catalog;
pub mod config;
pub mod message_log;
pub mod repositories;
pub mod store;
pub mod wiring;


pub use catalog::{CatalogError, CatalogTranslator};
pub use config::{ConfigError, FieldServiceConfig};
pub use message_log::InMemoryMessageLog;
pub use repositories::{
    InMemoryRecurringOrders, InMemoryRecurringTemplates, InMemorySaleLines, NameSequence,
};
pub use store::InMemoryRecordStore;
pub use wiring::InMemoryFieldService;
