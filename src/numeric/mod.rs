// ============================================================================
// Numeric Module
// Exact rational arithmetic over bounded 64-bit integers
// ============================================================================
//
// This module provides:
// - Rational: reduced fraction with checked arithmetic and a total order
// - RationalError: Error types for construction, arithmetic and parsing
// - gcd/lcm helpers used by normalization
//
// Design principles:
// - No floating-point operations (except the explicit, lossy to_f64)
// - All arithmetic has a checked form returning Result
// - Wide (i128) intermediates, narrowed once after reduction

mod conversion;
mod errors;
mod math;
mod ordering;
mod rational;

pub use conversion::DECIMAL_SCALE;
pub use errors::{RationalError, RationalResult};
pub use math::{gcd, lcm};
pub use rational::Rational;

pub(crate) use math::pow10;
