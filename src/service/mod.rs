//! Service layer for business logic and orchestration.
//!
//! Services sit between the Discord event handlers and the data (repository)
//! layer. They implement the core business rules, coordinate repository calls,
//! and work with domain models rather than entity models.

pub mod challenge;
