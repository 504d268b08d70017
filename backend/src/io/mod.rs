//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Handlers
//! translate JSON bodies into domain commands, call a service, and map the
//! result (or the `DomainError`) back to a JSON response.

pub mod rest;
