//! Task record management for Taskboard.
//!
//! This module implements the single bounded context of the application:
//! creating task records, retrieving them by identifier, listing them with
//! an optional search/status/priority filter, merging partial updates, and
//! deleting them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
