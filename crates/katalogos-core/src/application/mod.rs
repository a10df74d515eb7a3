//! Application layer: orchestration of the domain behind ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{AuditPolicy, AuditRun, AuditService, CatalogService, SlugMatch, Verdict};
