//! Client-facing transfer shapes and graph projections.
//!
//! # Responsibility
//! - Define the flat contributor-centric and park-centric views.
//! - Project a `ParkGraph` into those views, and copy inbound scalars back.
//!
//! # Invariants
//! - Views are acyclic: park summaries carry no owner, and the park view's
//!   contributor summary carries no park set.
//! - Inbound identifiers are never copied as field updates.

pub mod contributor_data;
pub mod mapper;
pub mod pet_park_data;
