//! Taskboard: a small task-tracking web application.
//!
//! A browser UI creates, lists, searches, filters, edits, and deletes task
//! records through a JSON REST API backed by a relational `tasks` table.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, Postgres)
//!
//! # Modules
//!
//! - [`task`]: Task records, filtering, and persistence
//! - [`web`]: HTTP surface (REST API plus the rendered page)
//! - [`config`]: Environment-driven server configuration

pub mod config;
pub mod task;
pub mod web;
