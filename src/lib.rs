//! starmind - decision core of a gamified learning platform
//!
//! Learners work through lectures, review flashcards on a daily schedule,
//! take on challenges that unlock tutorials, and mine knowledge out of
//! planets across a small galaxy. This crate holds the rules of that
//! system and nothing else: pure decision functions over a hydrated
//! learner snapshot, an energy economy gating every action, and atomic
//! deltas describing each outcome.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐    load     ┌────────────────┐
//! │ transport  │ ──────────▶ │ LearnerService │
//! │ (not here) │             └───────┬────────┘
//! └────────────┘                     │ pure decision fns
//!                 ┌──────────────────┼──────────────────┐
//!                 ▼                  ▼                  ▼
//!             review::*        progression::*       energy::*
//!                 │                  │                  │
//!                 └────────── LearnerDelta ────────────┘
//!                                    │ commit (versioned)
//!                                    ▼
//!                            store::LearnerStore
//! ```
//!
//! The store, clock and randomness are injected; nothing in this crate
//! performs I/O of its own.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod energy;
pub mod error;
pub mod progression;
pub mod review;
pub mod service;
pub mod store;

pub use domain::*;
pub use error::ActionError;
