//! Registry use-case services.
//!
//! # Responsibility
//! - Resolve, reconcile and validate entity graphs for each façade call.
//! - Keep transport callers decoupled from storage details.

mod error;
pub mod ownership;
pub mod park_service;
pub mod reconcile;
pub mod resolve;

pub use error::{ErrorKind, ParkServiceError, ServiceResult};
