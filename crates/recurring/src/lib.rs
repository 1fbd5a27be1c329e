//! Recurring field service orders generated from sale lines.
//!
//! When a product tracked as `recurring` is sold, the service generation
//! workflow asks the [`RecurringOrderLinker`] to find the recurring order
//! already generated for each line, or to create and link one.

pub mod derive;
pub mod error;
pub mod hook;
pub mod linker;
pub mod messages;
pub mod order;
pub mod repository;
pub mod template;

pub use derive::{compose_description, derive_single, derive_values};
pub use error::{RecurringError, RecurringResult};
pub use linker::RecurringOrderLinker;
pub use order::{RecurringOrder, RecurringValues};
pub use repository::{RecurringOrderRepository, RecurringTemplateRepository};
pub use template::RecurringTemplate;
