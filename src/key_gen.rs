//! Key generation for the Cramer-Shoup scheme.

use ark_ec::CurveGroup;
use ark_std::rand::RngCore;

use crate::{sample, DecryptKey, EncryptKey, Error, Params};

/// Derives a Cramer-Shoup key pair from five long-term scalars.
///
/// Returns [`Error::EntropyExhausted`] and no partial key if the randomness
/// source cannot supply enough bytes for all five scalars.
///
/// # Example
///
/// ```rust
/// use ark_bls12_381::G1Projective as G;
/// use ark_serialize::CanonicalSerialize;
/// use ark_std::UniformRand;
/// use rand::thread_rng;
/// use dre_auth::{key_gen, Params};
///
/// let rng = &mut thread_rng();
///
/// let pp = Params::<G>::rand(rng);
/// let (dk, ek) = key_gen(rng, &pp).unwrap();
///
/// let m = G::rand(rng);
/// let mut message = Vec::new();
/// m.serialize_compressed(&mut message).unwrap();
///
/// let ciphertext = ek.encrypt(rng, &pp, &message).unwrap();
/// assert_eq!(dk.decrypt(&ciphertext).unwrap(), message);
/// ```
pub fn key_gen<C: CurveGroup, R: RngCore>(
    rng: &mut R,
    pp: &Params<C>,
) -> Result<(DecryptKey<C>, EncryptKey<C>), Error> {
    let x1 = sample::rand_long_term_scalar(rng)?;
    let x2 = sample::rand_long_term_scalar(rng)?;
    let y1 = sample::rand_long_term_scalar(rng)?;
    let y2 = sample::rand_long_term_scalar(rng)?;
    let z = sample::rand_long_term_scalar(rng)?;

    // c = g1 * x1 + g2 * x2
    // d = g1 * y1 + g2 * y2
    // h = g1 * z
    let c = pp.g1 * x1 + pp.g2 * x2;
    let d = pp.g1 * y1 + pp.g2 * y2;
    let h = pp.g1 * z;

    Ok((DecryptKey { x1, x2, y1, y2, z }, EncryptKey { c, d, h }))
}

#[cfg(test)]
mod test {
    use ark_bls12_381::{Fr, G1Projective as G};
    use ark_std::test_rng;

    use super::*;
    use crate::{encoding, testutil::FixedRng};

    #[test]
    fn test_public_key_matches_private_key() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let (dk, ek) = key_gen(rng, &pp).unwrap();

        assert_eq!(ek.c, pp.g1 * dk.x1 + pp.g2 * dk.x2);
        assert_eq!(ek.d, pp.g1 * dk.y1 + pp.g2 * dk.y2);
        assert_eq!(ek.h, pp.g1 * dk.z);
    }

    #[test]
    fn test_key_gen_entropy_boundary() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let n = encoding::scalar_len::<Fr>();

        let enough: Vec<u8> = (0..5 * n).map(|i| i as u8).collect();
        assert!(key_gen(&mut FixedRng::new(enough.clone()), &pp).is_ok());

        let short = &enough[..5 * n - 1];
        assert_eq!(
            key_gen(&mut FixedRng::new(short.to_vec()), &pp).unwrap_err(),
            Error::EntropyExhausted
        );
    }
}
