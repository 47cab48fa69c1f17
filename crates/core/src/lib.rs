//! Core business logic for Meridian.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Rounding, formatting, conversion, gain/loss and exchange rates
//! - `preferences` - Console state (onboarding, dismissed banners) behind a storage seam

pub mod currency;
pub mod preferences;
