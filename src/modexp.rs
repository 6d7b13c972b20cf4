use num::BigUint;
use num::One;

use crate::errors::Rejection;
use crate::mpi;

/// Modular exponentiation service used by the verifier.
///
/// Implementations must return exactly `modulus.len()` bytes (I2OSP to the
/// modulus width) and may assume a nonzero modulus. `reduction_factor` is
/// the precomputed Barrett constant for the modulus; whether it is checked
/// before use is what separates [`Checked`] from [`Trusted`].
pub trait ModExp {
    fn mod_exp(
        &self,
        base: &[u8],
        exp: &[u8],
        modulus: &[u8],
        reduction_factor: &[u8],
    ) -> Result<Vec<u8>, Rejection>;
}

/// Validates the reduction factor against the modulus before exponentiating.
pub struct Checked;

/// Assumes the caller has already validated the reduction factor.
///
/// Handing this an unvalidated factor is a contract violation; a backend
/// that actually reduces through the factor would produce garbage.
pub struct Trusted;

impl ModExp for Checked {
    fn mod_exp(
        &self,
        base: &[u8],
        exp: &[u8],
        modulus: &[u8],
        reduction_factor: &[u8],
    ) -> Result<Vec<u8>, Rejection> {
        let n = BigUint::from_bytes_be(modulus);
        let expected = (BigUint::one() << (16 * modulus.len())) / n;
        if BigUint::from_bytes_be(reduction_factor) != expected {
            return Err(Rejection::BadReductionFactor);
        }
        Ok(mpi::pow_mod(base, exp, modulus))
    }
}

impl ModExp for Trusted {
    fn mod_exp(
        &self,
        base: &[u8],
        exp: &[u8],
        modulus: &[u8],
        _reduction_factor: &[u8],
    ) -> Result<Vec<u8>, Rejection> {
        Ok(mpi::pow_mod(base, exp, modulus))
    }
}
