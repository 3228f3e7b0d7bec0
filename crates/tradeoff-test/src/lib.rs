//! Shared test fixtures for Tradeoff crates.
//!
//! - [`scenario`] - hand-written scenarios with known answers
//! - [`random`] - seeded random populations for property tests
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! tradeoff-test = { workspace = true }
//! ```

pub mod random;
pub mod scenario;

pub use random::{random_bounds, random_store};
pub use scenario::{fpr_cost_bounds, fpr_cost_store, model_zoo_json, model_zoo_store};
