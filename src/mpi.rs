use num::BigUint;
use num::One;

/// `base ^ exp % modulus`, returned as exactly `modulus.len()` bytes.
#[inline]
pub fn pow_mod(base: &[u8], exp: &[u8], modulus: &[u8]) -> Vec<u8> {
    let result = BigUint::from_bytes_be(base).modpow(
        &BigUint::from_bytes_be(exp),
        &BigUint::from_bytes_be(modulus),
    );
    left_pad(&result.to_bytes_be(), modulus.len())
}

/// `a < b`, as unsigned big-endian integers.
#[inline]
pub fn lt(a: &[u8], b: &[u8]) -> bool {
    BigUint::from_bytes_be(a) < BigUint::from_bytes_be(b)
}

/// The Barrett reduction constant for a `k`-byte modulus:
/// `floor(256^(2k) / n)`.
///
/// This is the value verification callers pass as the `reduction_factor`.
/// Panics if `n` is zero.
pub fn barrett_factor(n: &[u8]) -> Vec<u8> {
    ((BigUint::one() << (16 * n.len())) / BigUint::from_bytes_be(n)).to_bytes_be()
}

fn left_pad(bytes: &[u8], width: usize) -> Vec<u8> {
    if bytes.len() >= width {
        return bytes.to_vec();
    }
    let mut padded = vec![0u8; width - bytes.len()];
    padded.extend_from_slice(bytes);
    padded
}
