//! Products domain module.
//!
//! Only the product attributes the field service flow reads: how a sold
//! product is tracked as field service work and which templates it points at.

pub mod product;

pub use product::{Product, ProductId, ServiceTracking};
