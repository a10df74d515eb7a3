//! Application services: the use-case layer over the domain.

pub mod audit_service;
pub mod catalog_service;

pub use audit_service::{AuditPolicy, AuditRun, AuditService, Verdict};
pub use catalog_service::{CatalogService, SlugMatch};
