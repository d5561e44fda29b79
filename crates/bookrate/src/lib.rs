//! Rate calculation core for the hotel booking calculator service.
//!
//! The [`rates`] module holds the only decision logic in the system: validating
//! an incoming rate request and deriving the customer price, discount, and
//! hotel payout figures under the promotion stacking policy. [`config`],
//! [`telemetry`], and [`error`] carry the process-level plumbing the serving
//! binary wires together at startup.

pub mod config;
pub mod error;
pub mod rates;
pub mod telemetry;
