use ark_ec::CurveGroup;
use ark_std::rand::RngCore;

use crate::{
    dual_receiver::{
        ciphertext::{DrCiphertext, DrMessage},
        nizk::NizkProof,
    },
    encoding,
    encrypt::alpha_scalar,
    error::Error,
    sample, EncryptKey, Params,
};

impl<C: CurveGroup> DrMessage<C> {
    /// Encrypts one group element to both public keys with independent
    /// randomness and attaches the consistency proof.
    pub fn encrypt<R: RngCore>(
        rng: &mut R,
        pp: &Params<C>,
        message: &[u8],
        pub1: &EncryptKey<C>,
        pub2: &EncryptKey<C>,
    ) -> Result<Self, Error> {
        let m: C = encoding::point_from_bytes(message)?;

        let k1 = sample::rand_scalar::<C::ScalarField, _>(rng)?;
        let k2 = sample::rand_scalar::<C::ScalarField, _>(rng)?;

        // u11 = g1 * k1, u21 = g2 * k1; u12 = g1 * k2, u22 = g2 * k2
        let u11 = pp.g1 * k1;
        let u21 = pp.g2 * k1;
        let u12 = pp.g1 * k2;
        let u22 = pp.g2 * k2;

        // both halves carry the same m
        let e1 = pub1.h * k1 + m;
        let e2 = pub2.h * k2 + m;

        let alpha1 = alpha_scalar(&u11, &u21, &e1);
        let alpha2 = alpha_scalar(&u12, &u22, &e2);

        // vi = ci * ki + di * (ki * alphai)
        let v1 = pub1.c * k1 + pub1.d * (k1 * alpha1);
        let v2 = pub2.c * k2 + pub2.d * (k2 * alpha2);

        let cipher = DrCiphertext {
            u11,
            u21,
            e1,
            v1,
            u12,
            u22,
            e2,
            v2,
        };
        let proof = NizkProof::prove(rng, pp, &cipher, pub1, pub2, alpha1, alpha2, k1, k2)?;

        Ok(Self { cipher, proof })
    }
}
