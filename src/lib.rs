//! # Sales Records
//!
//! A domain-model library for a sales record-keeping scenario.
//!
//! ## Overview
//!
//! Every domain type is a self-validating value object: construction and
//! every subsequent mutation run the same validation, so a live instance is
//! always in a valid state.
//!
//! ## Module Structure
//!
//! - `values`: leaf value objects (`Address`, `Email`, `Price`) and the
//!   shared [`values::ValidationError`] taxonomy
//! - `records`: composite records (`Client`, `Product`) assembled from the
//!   leaf types
//! - `loader`: xlsx ingestion into named-column tables (`SheetTable`)

#![forbid(unsafe_code)]

pub mod loader;
pub mod records;
pub mod values;
