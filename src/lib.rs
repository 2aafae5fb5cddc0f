//! # PAS Rust Backend
//!
//! Photographer availability scheduling engine.
//!
//! This crate computes, for a roster of photographers with declared
//! availability windows and already-confirmed bookings, the free time slots
//! of a requested duration that could be offered for a new booking. Rosters
//! are loaded from JSON, results are serialized back to JSON as
//! (photographer, candidate slot) pairs.
//!
//! ## Features
//!
//! - **Data Loading**: Parse photographer rosters from JSON format
//! - **Slot Finding**: First-fit free-slot search per availability window
//! - **Time Handling**: Offset-preserving timestamps and whole-minute
//!   interval measurement
//! - **Persistence**: Repository abstraction with an in-memory backend
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Core data model shared across the crate
//! - [`models`]: Time helpers, roster parsing and rendering
//! - [`db`]: Repository trait, in-memory implementation, factory
//! - [`services`]: Slot-finding algorithm and orchestration
//! - [`config`]: Run configuration (slot duration) from TOML and env
//!
//! The slot finder itself is a pure, synchronous function over in-memory
//! data; all I/O lives at the edges (the `pas-scheduler` binary).

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
