//! Pseudo-distance derived from a postal code.
//!
//! There is no geocoding: the distance is a deterministic function of the
//! CEP's trailing three digits. The intended range was "5 to 55 km", but the
//! closed form tops out at 54 km. The formula is the contract.

use crate::postal_code::PostalCode;

/// Smallest distance the formula can produce.
pub const MIN_DISTANCE_KM: u32 = 5;

/// Largest distance the formula can produce (`last_three = 999`).
pub const MAX_DISTANCE_KM: u32 = 54;

/// `floor((last_three / 1000) * 50) + 5`, evaluated in `f64`.
///
/// Floating point is kept on purpose: for `last_three = 580` the product is
/// `28.999…` and floors to 28, where integer arithmetic would give 29.
pub fn estimate_distance_km(postal_code: &PostalCode) -> u32 {
    let last_digits = f64::from(postal_code.last_three());
    ((last_digits / 1000.0) * 50.0).floor() as u32 + MIN_DISTANCE_KM
}
