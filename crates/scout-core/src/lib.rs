//! # scout-core
//!
//! Core types, labels, address helpers, and error types for scout.
//!
//! This crate provides the foundational types shared across all scout crates:
//! - Entity structs for fetched pages, derived company profiles, and history rows
//! - Fixed label enums (hiring intensity, legal framework)
//! - Address normalization and company name derivation
//! - Cross-cutting error types
//! - CLI response types

pub mod address;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
