//! The consistency proof for dual-receiver ciphertexts: a Fiat-Shamir
//! transformed Sigma protocol showing both halves encrypt the same point.

use ark_ec::CurveGroup;
use ark_std::rand::RngCore;

use crate::{
    dual_receiver::ciphertext::DrCiphertext,
    encoding::{self, Transcript},
    error::Error,
    sample, EncryptKey, Params,
};

const CHALLENGE_DOMAIN: &[u8] = b"dre-auth:dre-nizk";

/// Proof of knowledge of `k1, k2` tying the two halves of a
/// [`DrCiphertext`] to the same plaintext.
///
/// Wire format: `l || n1 || n2`, three fixed-width scalars.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NizkProof<C: CurveGroup> {
    pub(crate) l: C::ScalarField,
    pub(crate) n1: C::ScalarField,
    pub(crate) n2: C::ScalarField,
}

impl<C: CurveGroup> NizkProof<C> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn prove<R: RngCore>(
        rng: &mut R,
        pp: &Params<C>,
        cipher: &DrCiphertext<C>,
        pub1: &EncryptKey<C>,
        pub2: &EncryptKey<C>,
        alpha1: C::ScalarField,
        alpha2: C::ScalarField,
        k1: C::ScalarField,
        k2: C::ScalarField,
    ) -> Result<Self, Error> {
        let t1 = sample::rand_scalar::<C::ScalarField, _>(rng)?;
        let t2 = sample::rand_scalar::<C::ScalarField, _>(rng)?;

        // T11 = g1 * t1, T21 = g2 * t1
        let t11 = pp.g1 * t1;
        let t21 = pp.g2 * t1;
        // T31 = (c1 + d1 * alpha1) * t1
        let t31 = (pub1.c + pub1.d * alpha1) * t1;

        // T12 = g1 * t2, T22 = g2 * t2
        let t12 = pp.g1 * t2;
        let t22 = pp.g2 * t2;
        // T32 = (c2 + d2 * alpha2) * t2
        let t32 = (pub2.c + pub2.d * alpha2) * t2;

        // T4 = h1 * t1 - h2 * t2
        let t4 = pub1.h * t1 - pub2.h * t2;

        let l = challenge(
            pp,
            pub1,
            pub2,
            cipher,
            alpha1,
            alpha2,
            &[t11, t21, t31, t12, t22, t32, t4],
        );

        // ni = ti - l * ki (mod q)
        Ok(Self {
            l,
            n1: t1 - l * k1,
            n2: t2 - l * k2,
        })
    }

    /// Reconstructs the prover's commitments from `(l, n1, n2)` and accepts
    /// iff the recomputed challenge equals `l`.
    pub(crate) fn verify(
        &self,
        pp: &Params<C>,
        cipher: &DrCiphertext<C>,
        pub1: &EncryptKey<C>,
        pub2: &EncryptKey<C>,
        alpha1: C::ScalarField,
        alpha2: C::ScalarField,
    ) -> bool {
        let Self { l, n1, n2 } = *self;

        // T11' = g1 * n1 + u11 * l, T21' = g2 * n1 + u21 * l
        let t11 = pp.g1 * n1 + cipher.u11 * l;
        let t21 = pp.g2 * n1 + cipher.u21 * l;
        // T31' = (c1 + d1 * alpha1) * n1 + v1 * l
        let t31 = (pub1.c + pub1.d * alpha1) * n1 + cipher.v1 * l;

        let t12 = pp.g1 * n2 + cipher.u12 * l;
        let t22 = pp.g2 * n2 + cipher.u22 * l;
        let t32 = (pub2.c + pub2.d * alpha2) * n2 + cipher.v2 * l;

        // T4' = h1 * n1 - h2 * n2 + (e1 - e2) * l
        let t4 = pub1.h * n1 - pub2.h * n2 + (cipher.e1 - cipher.e2) * l;

        let l_prime = challenge(
            pp,
            pub1,
            pub2,
            cipher,
            alpha1,
            alpha2,
            &[t11, t21, t31, t12, t22, t32, t4],
        );

        l_prime == l
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(3 * encoding::scalar_len::<C::ScalarField>());
        for s in [&self.l, &self.n1, &self.n2] {
            out.extend_from_slice(&encoding::scalar_to_bytes(s));
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let n = encoding::scalar_len::<C::ScalarField>();
        if bytes.len() != 3 * n {
            return Err(Error::MalformedEncoding);
        }
        Ok(Self {
            l: encoding::scalar_from_bytes(&bytes[..n])?,
            n1: encoding::scalar_from_bytes(&bytes[n..2 * n])?,
            n2: encoding::scalar_from_bytes(&bytes[2 * n..])?,
        })
    }
}

/// The Fiat-Shamir challenge over the full transcript, in the wire-contract
/// order: group parameters, both public keys, the full ciphertext with both
/// alphas, then the seven commitments.
fn challenge<C: CurveGroup>(
    pp: &Params<C>,
    pub1: &EncryptKey<C>,
    pub2: &EncryptKey<C>,
    cipher: &DrCiphertext<C>,
    alpha1: C::ScalarField,
    alpha2: C::ScalarField,
    commitments: &[C; 7],
) -> C::ScalarField {
    let mut t = Transcript::new(CHALLENGE_DOMAIN);

    // g1 || g2 || q
    t.append(&pp.g1);
    t.append(&pp.g2);
    t.append_modulus::<C::ScalarField>();

    // c1 || d1 || h1 || c2 || d2 || h2
    for p in [&pub1.c, &pub1.d, &pub1.h, &pub2.c, &pub2.d, &pub2.h] {
        t.append(p);
    }

    // u11 || u21 || e1 || v1 || alpha1 || u12 || u22 || e2 || v2 || alpha2
    for p in [&cipher.u11, &cipher.u21, &cipher.e1, &cipher.v1] {
        t.append(p);
    }
    t.append(&alpha1);
    for p in [&cipher.u12, &cipher.u22, &cipher.e2, &cipher.v2] {
        t.append(p);
    }
    t.append(&alpha2);

    // T11 || T21 || T31 || T12 || T22 || T32 || T4
    for p in commitments {
        t.append(p);
    }

    t.challenge()
}
