//! campushub, an API gateway and timetable service for an academic
//! administration backend.
//!
//! The service wraps the backend's REST API behind typed, bearer-
//! authenticated fetch wrappers, keeps an in-memory copy of the entity
//! collections synchronized after each successful mutation, and computes
//! the timetable grid and dashboard statistics server-side.

pub mod api;
pub mod cache;
pub mod schedule;
pub mod server;
pub mod store;
pub mod types;
