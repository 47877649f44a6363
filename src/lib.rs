//! G6PD Substance Safety Classification Service
//!
//! A small HTTP service that takes the name of a food, medication, or
//! product and returns a structured safety verdict for people with G6PD
//! deficiency, derived by querying the Anthropic Messages API and
//! validating the reply against a fixed five-field schema.
//!
//! # Quick Start
//!
//! ```bash
//! ANTHROPIC_API_KEY=sk-ant-xxx ./g6pd-safety
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   POST /api/check-safety   ┌─────────────────┐
//! │ Presentation │───────────────────────────▶│ Classification  │──────▶ Anthropic API
//! │ layer (SPA)  │◀───────────────────────────│ Service (Rust)  │
//! └──────────────┘       verdict JSON         └─────────────────┘
//! ```
//!
//! The service is total for valid input: transport and parse failures
//! degrade to a fixed "caution" fallback verdict instead of an error,
//! so a valid request never sees a blank failure — worst case is
//! "consult your healthcare provider".

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod anthropic;
pub mod classify;
pub mod config;
pub mod error;
pub mod prompts;
pub mod server;
pub mod traits;
