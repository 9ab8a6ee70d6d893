//! # cosmos-core
//!
//! Core types and pure view derivations for Cosmos Class.
//!
//! This crate provides the foundational types shared across all Cosmos crates:
//! - Entity structs for the records served by the portal backend
//! - Status and type enums (with the submission state machine)
//! - Serde adapters for the timestamp formats the backend emits
//! - View derivations (date grouping, status partition, grade display)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod timestamp;
pub mod views;
