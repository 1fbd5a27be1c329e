//! Sales orders domain module.
//!
//! Sale orders and their lines as typed records, the repository seam used to
//! update lines, and the service generation workflow that turns confirmed
//! lines into field service work through an ordered list of hooks.

pub mod generation;
pub mod line;
pub mod order;
pub mod repository;

pub use generation::{
    BaseGeneration, GenerationError, GenerationHook, NoopGeneration, ServiceGenerationWorkflow,
};
pub use line::{SaleLine, SaleLineId, ServiceLine};
pub use order::{SaleOrder, SaleOrderId};
pub use repository::SaleLineRepository;
