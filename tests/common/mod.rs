//! Shared test utilities for scopelog integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every helper uses fixed timestamps and caller sites so
//! rendered output is deterministic.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
