//! Metaforge Core Types and Definitions
//!
//! This crate provides the foundational types for the metaforge SQL
//! generator. It includes:
//!
//! - **Model**: The parsed entity/property model ([`model`] module)
//! - **Types**: The fixed diagram-type → SQL-type mapping tables ([`types`] module)
//! - **Naming**: Identifier case conversion and registry code resolution
//!   ([`naming`] module)

pub mod model;
pub mod naming;
pub mod types;
