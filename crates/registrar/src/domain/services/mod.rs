//! Domain Services
//!
//! Stateless domain logic that does not belong to a single entity.

mod grade_calculator;

pub use grade_calculator::*;
