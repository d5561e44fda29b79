//! Promotion stacking and rate derivation for booking quotes.
//!
//! A request flows through two stages: [`validation::validate`] turns the raw
//! wire shape into a [`ValidRate`] or a specific rejection, and
//! [`engine::calculate`] applies the stacking policy to produce the
//! [`RateResult`] returned to the booking front end. Both stages are pure;
//! [`router::rates_router`] is the only HTTP surface.

pub mod domain;
pub mod engine;
pub mod router;
pub mod validation;

pub use domain::{
    AppliedPromotion, PromotionCandidate, PromotionType, RateRequest, RateResult, ValidRate,
};
pub use engine::calculate;
pub use router::rates_router;
pub use validation::{validate, RateError};
