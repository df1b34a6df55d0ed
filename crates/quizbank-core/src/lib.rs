//! quizbank-core — Quiz data model, scoring, and mastery tracking.
//!
//! This crate defines the question bank, the pure scoring and smoothing
//! logic, the recommendation selector, and the engine that ties them to
//! a persisted progress store.

pub mod bank;
pub mod engine;
pub mod error;
pub mod mastery;
pub mod model;
pub mod notes;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod traits;
