//! Scalar sampling from an injected randomness source.
//!
//! Two distinct flavors: ephemeral scalars for per-message randomness and
//! long-term scalars for keys that live across sessions. The two must not be
//! unified; long-term sampling additionally passes the sourced bytes through
//! a domain-separated hash. Both read exactly one field element's worth of
//! bytes and fail with [`Error::EntropyExhausted`] on a short read.

use ark_ff::PrimeField;
use ark_std::rand::RngCore;

use crate::{encoding, error::Error};

const LONG_TERM_DOMAIN: &[u8] = b"dre-auth:long-term-scalar";

/// Samples one ephemeral scalar.
pub fn rand_scalar<F: PrimeField, R: RngCore>(rng: &mut R) -> Result<F, Error> {
    let mut buf = vec![0u8; encoding::scalar_len::<F>()];
    rng.try_fill_bytes(&mut buf)
        .map_err(|_| Error::EntropyExhausted)?;
    Ok(F::from_be_bytes_mod_order(&buf))
}

/// Samples one long-term scalar, suitable for key material.
pub fn rand_long_term_scalar<F: PrimeField, R: RngCore>(rng: &mut R) -> Result<F, Error> {
    let mut buf = vec![0u8; encoding::scalar_len::<F>()];
    rng.try_fill_bytes(&mut buf)
        .map_err(|_| Error::EntropyExhausted)?;
    Ok(encoding::hash_to_scalar(LONG_TERM_DOMAIN, &buf))
}

/// Samples `n` ephemeral scalars, all-or-nothing.
pub(crate) fn rand_scalars<F: PrimeField, R: RngCore>(
    rng: &mut R,
    n: usize,
) -> Result<Vec<F>, Error> {
    (0..n).map(|_| rand_scalar(rng)).collect()
}

#[cfg(test)]
mod test {
    use ark_bls12_381::Fr;

    use super::*;
    use crate::testutil::FixedRng;

    fn pattern(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i * 7 + 3) as u8).collect()
    }

    #[test]
    fn test_flavors_are_distinct() {
        let n = encoding::scalar_len::<Fr>();
        let ephemeral = rand_scalar::<Fr, _>(&mut FixedRng::new(pattern(n))).unwrap();
        let long_term = rand_long_term_scalar::<Fr, _>(&mut FixedRng::new(pattern(n))).unwrap();
        assert_ne!(ephemeral, long_term);
    }

    #[test]
    fn test_short_read_is_entropy_exhaustion() {
        let n = encoding::scalar_len::<Fr>();
        let mut rng = FixedRng::new(pattern(n - 1));
        assert_eq!(
            rand_scalar::<Fr, _>(&mut rng).unwrap_err(),
            Error::EntropyExhausted
        );

        let mut rng = FixedRng::new(pattern(3 * n));
        assert!(rand_scalars::<Fr, _>(&mut rng, 3).is_ok());
        let mut rng = FixedRng::new(pattern(3 * n));
        assert_eq!(
            rand_scalars::<Fr, _>(&mut rng, 4).unwrap_err(),
            Error::EntropyExhausted
        );
    }

    #[test]
    fn test_fixed_bytes_give_fixed_scalars() {
        let n = encoding::scalar_len::<Fr>();
        let a = rand_scalar::<Fr, _>(&mut FixedRng::new(pattern(n))).unwrap();
        let b = rand_scalar::<Fr, _>(&mut FixedRng::new(pattern(n))).unwrap();
        assert_eq!(a, b);
    }
}
