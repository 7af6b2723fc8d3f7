use ark_ec::CurveGroup;
use ark_std::rand::RngCore;

use crate::{
    ciphertext::Ciphertext,
    encoding::{self, Transcript},
    error::Error,
    sample, Params,
};

const ALPHA_DOMAIN: &[u8] = b"dre-auth:cs-alpha";

/// Cramer-Shoup public key `(c, d, h)`, derived deterministically from the
/// holder's [`DecryptKey`](crate::DecryptKey).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EncryptKey<C: CurveGroup> {
    pub(crate) c: C,
    pub(crate) d: C,
    pub(crate) h: C,
}

impl<C: CurveGroup> EncryptKey<C> {
    /// Encrypts one group element under this key. `message` must be a valid
    /// fixed-width point encoding; mapping arbitrary payloads into group
    /// elements is the caller's responsibility.
    pub fn encrypt<R: RngCore>(
        &self,
        rng: &mut R,
        pp: &Params<C>,
        message: &[u8],
    ) -> Result<Ciphertext<C>, Error> {
        let m: C = encoding::point_from_bytes(message)?;
        let r = sample::rand_scalar::<C::ScalarField, _>(rng)?;

        // u1 = g1 * r, u2 = g2 * r
        let u1 = pp.g1 * r;
        let u2 = pp.g2 * r;

        // e = h * r + m
        let e = self.h * r + m;

        // alpha = H(u1 || u2 || e)
        let alpha = alpha_scalar(&u1, &u2, &e);

        // v = c * r + d * (r * alpha)
        let v = self.c * r + self.d * (r * alpha);

        Ok(Ciphertext { u1, u2, e, v })
    }
}

/// The per-ciphertext challenge scalar binding `(u1, u2, e)` together.
pub(crate) fn alpha_scalar<C: CurveGroup>(u1: &C, u2: &C, e: &C) -> C::ScalarField {
    let mut t = Transcript::new(ALPHA_DOMAIN);
    t.append(u1);
    t.append(u2);
    t.append(e);
    t.challenge()
}
