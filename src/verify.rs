use crate::errors::Rejection;
use crate::modexp::Checked;
use crate::modexp::ModExp;
use crate::modexp::Trusted;
use crate::mpi;

/// Verify an RSASSA-PKCS1-v1_5 signature, RFC 8017 §8.2.2.
///
/// `msg_digest_info` is the DER DigestInfo the signer encoded (see
/// [`Digestable::digest_info`](crate::Digestable::digest_info)), `s` the
/// signature, and `n` / `e` the public key, all as unsigned big-endian
/// byte strings. `reduction_factor` is the Barrett constant for `n`
/// ([`barrett_factor`](crate::barrett_factor)); it is validated against
/// the modulus before use.
///
/// Succeeds iff the signature is valid; any other outcome is a
/// [`Rejection`]. No bound is placed on the exponent, so callers
/// verifying untrusted keys should cap `e.len()` themselves to bound
/// computation cost.
pub fn pkcs1_v15_verify(
    msg_digest_info: &[u8],
    s: &[u8],
    n: &[u8],
    e: &[u8],
    reduction_factor: &[u8],
) -> Result<(), Rejection> {
    pkcs1_v15_verify_with(&Checked, msg_digest_info, s, n, e, reduction_factor)
}

/// [`pkcs1_v15_verify`], minus the reduction factor validation.
///
/// Only for callers which have already established that `reduction_factor`
/// is the Barrett constant for `n`; passing an unvalidated factor is a
/// contract violation, not a detectable error.
pub fn pkcs1_v15_verify_prevalidated(
    msg_digest_info: &[u8],
    s: &[u8],
    n: &[u8],
    e: &[u8],
    reduction_factor: &[u8],
) -> Result<(), Rejection> {
    pkcs1_v15_verify_with(&Trusted, msg_digest_info, s, n, e, reduction_factor)
}

/// The verification routine behind both entry points, generic over the
/// exponentiation backend.
pub fn pkcs1_v15_verify_with<M: ModExp>(
    pow: &M,
    msg_digest_info: &[u8],
    s: &[u8],
    n: &[u8],
    e: &[u8],
    reduction_factor: &[u8],
) -> Result<(), Rejection> {
    let k = n.len();
    if s.len() != k {
        return Err(Rejection::SignatureLength);
    }

    // RSAVP1
    if !mpi::lt(s, n) {
        return Err(Rejection::SignatureOutOfRange);
    }
    let m = pow.mod_exp(s, e, n, reduction_factor)?;

    // I2OSP
    if m.len() != k {
        return Err(Rejection::ResultTooLarge);
    }
    let em = m;

    // EMSA-PKCS1-v1_5: 0x00 || 0x01 || PS || 0x00 || DigestInfo,
    // PS all 0xff and at least eight bytes long
    if k < msg_digest_info.len() + 11 {
        return Err(Rejection::EncodedLengthTooShort);
    }
    let mut em_prime = Vec::with_capacity(k);
    em_prime.extend_from_slice(&[0x00, 0x01]);
    em_prime.resize(k - msg_digest_info.len() - 1, 0xff);
    em_prime.push(0x00);
    em_prime.extend_from_slice(msg_digest_info);

    if em != em_prime {
        return Err(Rejection::EncodingMismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::pkcs1_v15_verify_with;
    use crate::errors::Rejection;
    use crate::modexp::ModExp;

    struct Oversize;

    impl ModExp for Oversize {
        fn mod_exp(
            &self,
            _base: &[u8],
            _exp: &[u8],
            modulus: &[u8],
            _reduction_factor: &[u8],
        ) -> Result<Vec<u8>, Rejection> {
            Ok(vec![0; modulus.len() + 1])
        }
    }

    struct Explode;

    impl ModExp for Explode {
        fn mod_exp(
            &self,
            _base: &[u8],
            _exp: &[u8],
            _modulus: &[u8],
            _reduction_factor: &[u8],
        ) -> Result<Vec<u8>, Rejection> {
            unreachable!("length and range checks come before exponentiation")
        }
    }

    #[test]
    fn wrong_length_fails_before_exponentiation() {
        assert_eq!(
            Err(Rejection::SignatureLength),
            pkcs1_v15_verify_with(&Explode, &[], &[1], &[0xff, 0xff], &[1], &[]),
        );
    }

    #[test]
    fn out_of_range_fails_before_exponentiation() {
        assert_eq!(
            Err(Rejection::SignatureOutOfRange),
            pkcs1_v15_verify_with(&Explode, &[], &[0xff, 0xff], &[0xff, 0xff], &[1], &[]),
        );
    }

    #[test]
    fn overlong_exponentiation_result_rejected() {
        assert_eq!(
            Err(Rejection::ResultTooLarge),
            pkcs1_v15_verify_with(&Oversize, &[], &[0], &[0xff], &[1], &[]),
        );
    }
}
