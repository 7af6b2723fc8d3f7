use ark_ec::CurveGroup;

use crate::{
    ciphertext::Ciphertext, dual_receiver::ciphertext::DrMessage, encrypt::alpha_scalar,
    error::Error, DecryptKey, EncryptKey, Params,
};

/// Which of the two recipients is decrypting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Party {
    First,
    Second,
}

impl<C: CurveGroup> DrMessage<C> {
    /// Verifies the consistency proof, then decrypts the half belonging to
    /// `party` with `dk`. The proof is checked first; on failure no
    /// decryption is attempted.
    pub fn decrypt(
        &self,
        pp: &Params<C>,
        pub1: &EncryptKey<C>,
        pub2: &EncryptKey<C>,
        dk: &DecryptKey<C>,
        party: Party,
    ) -> Result<Vec<u8>, Error> {
        let alpha1 = alpha_scalar(&self.cipher.u11, &self.cipher.u21, &self.cipher.e1);
        let alpha2 = alpha_scalar(&self.cipher.u12, &self.cipher.u22, &self.cipher.e2);

        if !self
            .proof
            .verify(pp, &self.cipher, pub1, pub2, alpha1, alpha2)
        {
            return Err(Error::VerificationFailed);
        }

        let half = match party {
            Party::First => Ciphertext {
                u1: self.cipher.u11,
                u2: self.cipher.u21,
                e: self.cipher.e1,
                v: self.cipher.v1,
            },
            Party::Second => Ciphertext {
                u1: self.cipher.u12,
                u2: self.cipher.u22,
                e: self.cipher.e2,
                v: self.cipher.v2,
            },
        };

        dk.decrypt(&half)
    }
}

#[cfg(test)]
mod test {
    use ark_bls12_381::{Fr, G1Projective as G};
    use ark_std::{test_rng, UniformRand};

    use super::*;
    use crate::{encoding, key_gen, testutil::FixedRng};

    fn random_message(rng: &mut impl ark_std::rand::RngCore) -> Vec<u8> {
        encoding::point_to_bytes(&G::rand(rng))
    }

    #[test]
    fn test_encrypt_decrypt_both_parties() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let (dk1, ek1) = key_gen(rng, &pp).unwrap();
        let (dk2, ek2) = key_gen(rng, &pp).unwrap();

        let message = random_message(rng);
        let drm = DrMessage::encrypt(rng, &pp, &message, &ek1, &ek2).unwrap();

        let m1 = drm.decrypt(&pp, &ek1, &ek2, &dk1, Party::First).unwrap();
        let m2 = drm.decrypt(&pp, &ek1, &ek2, &dk2, Party::Second).unwrap();
        assert_eq!(m1, message);
        assert_eq!(m2, message);
    }

    #[test]
    fn test_tampered_cipher_fields_fail_verification() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let (dk1, ek1) = key_gen(rng, &pp).unwrap();
        let (_, ek2) = key_gen(rng, &pp).unwrap();

        let message = random_message(rng);
        let drm = DrMessage::encrypt(rng, &pp, &message, &ek1, &ek2).unwrap();
        let offset = G::rand(rng);

        for i in 0..8 {
            let mut bad = drm;
            match i {
                0 => bad.cipher.u11 += offset,
                1 => bad.cipher.u21 += offset,
                2 => bad.cipher.e1 += offset,
                3 => bad.cipher.v1 += offset,
                4 => bad.cipher.u12 += offset,
                5 => bad.cipher.u22 += offset,
                6 => bad.cipher.e2 += offset,
                _ => bad.cipher.v2 += offset,
            }
            assert_eq!(
                bad.decrypt(&pp, &ek1, &ek2, &dk1, Party::First).unwrap_err(),
                Error::VerificationFailed
            );
        }
    }

    #[test]
    fn test_tampered_proof_fields_fail_verification() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let (dk1, ek1) = key_gen(rng, &pp).unwrap();
        let (_, ek2) = key_gen(rng, &pp).unwrap();

        let message = random_message(rng);
        let drm = DrMessage::encrypt(rng, &pp, &message, &ek1, &ek2).unwrap();
        let one = Fr::from(1u64);

        for i in 0..3 {
            let mut bad = drm;
            match i {
                0 => bad.proof.l += one,
                1 => bad.proof.n1 += one,
                _ => bad.proof.n2 += one,
            }
            assert_eq!(
                bad.decrypt(&pp, &ek1, &ek2, &dk1, Party::First).unwrap_err(),
                Error::VerificationFailed
            );
        }
    }

    #[test]
    fn test_wrong_public_keys_fail_verification() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let (dk1, ek1) = key_gen(rng, &pp).unwrap();
        let (_, ek2) = key_gen(rng, &pp).unwrap();
        let (_, ek3) = key_gen(rng, &pp).unwrap();

        let message = random_message(rng);
        let drm = DrMessage::encrypt(rng, &pp, &message, &ek1, &ek2).unwrap();

        assert_eq!(
            drm.decrypt(&pp, &ek1, &ek3, &dk1, Party::First).unwrap_err(),
            Error::VerificationFailed
        );
    }

    #[test]
    fn test_wire_round_trip() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let (dk1, ek1) = key_gen(rng, &pp).unwrap();
        let (_, ek2) = key_gen(rng, &pp).unwrap();

        let message = random_message(rng);
        let drm = DrMessage::encrypt(rng, &pp, &message, &ek1, &ek2).unwrap();

        let bytes = drm.to_bytes();
        assert_eq!(
            bytes.len(),
            8 * encoding::point_len::<G>() + 3 * encoding::scalar_len::<Fr>()
        );
        let parsed = DrMessage::<G>::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, drm);
        assert_eq!(
            parsed.decrypt(&pp, &ek1, &ek2, &dk1, Party::First).unwrap(),
            message
        );
    }

    #[test]
    fn test_deterministic_with_fixed_randomness() {
        let rng = &mut test_rng();
        let pp = Params::<G>::rand(rng);
        let (_, ek1) = key_gen(rng, &pp).unwrap();
        let (_, ek2) = key_gen(rng, &pp).unwrap();

        let message = random_message(rng);
        let n = encoding::scalar_len::<Fr>();
        // k1, k2 plus t1, t2 for the proof
        let data: Vec<u8> = (0..4 * n).map(|i| (i * 13 + 7) as u8).collect();

        let a = DrMessage::encrypt(&mut FixedRng::new(data.clone()), &pp, &message, &ek1, &ek2)
            .unwrap();
        let b = DrMessage::encrypt(&mut FixedRng::new(data), &pp, &message, &ek1, &ek2).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
    }
}
