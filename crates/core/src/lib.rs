//! # RoomBook Core
//!
//! Domain types and booking logic for the RoomBook meeting-room service.
//! Everything here is pure: conflict detection and availability derivation
//! operate on in-memory appointment records; persistence and HTTP live in
//! the `roombook-db` and `roombook-api` crates.

/// Conflict detection and availability-grid computation
pub mod booking;
/// Error taxonomy shared across the workspace
pub mod errors;
/// Appointment and availability data structures
pub mod models;
