//! Reconciliation domain: types and services for resolving an operator's
//! model selection into the set of deployable updates.

pub mod domain;
pub mod services;
