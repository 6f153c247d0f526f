//! Time input handling: format validation, normalization to 24-hour form,
//! and construction of a concrete instant on today's date.

pub mod instant;
pub mod normalize;
pub mod validate;

pub use instant::{ClockTime, Instant};
pub use normalize::normalize;
pub use validate::validate;
