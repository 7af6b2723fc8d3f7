use ark_ec::CurveGroup;

use crate::{dual_receiver::nizk::NizkProof, encoding, error::Error};

/// Two Cramer-Shoup halves over the same plaintext point, encrypted under
/// two different public keys with independent randomness.
///
/// Wire format: `u11 || u21 || e1 || v1 || u12 || u22 || e2 || v2`, eight
/// fixed-width compressed points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DrCiphertext<C: CurveGroup> {
    pub(crate) u11: C,
    pub(crate) u21: C,
    pub(crate) e1: C,
    pub(crate) v1: C,
    pub(crate) u12: C,
    pub(crate) u22: C,
    pub(crate) e2: C,
    pub(crate) v2: C,
}

impl<C: CurveGroup> DrCiphertext<C> {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 * encoding::point_len::<C>());
        for p in [
            &self.u11, &self.u21, &self.e1, &self.v1, &self.u12, &self.u22, &self.e2, &self.v2,
        ] {
            out.extend_from_slice(&encoding::point_to_bytes(p));
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let n = encoding::point_len::<C>();
        if bytes.len() != 8 * n {
            return Err(Error::MalformedEncoding);
        }
        let mut chunks = bytes.chunks_exact(n);
        let mut next = || -> Result<C, Error> {
            // chunks_exact yields exactly eight chunks after the length check
            encoding::point_from_bytes(chunks.next().ok_or(Error::MalformedEncoding)?)
        };
        Ok(Self {
            u11: next()?,
            u21: next()?,
            e1: next()?,
            v1: next()?,
            u12: next()?,
            u22: next()?,
            e2: next()?,
            v2: next()?,
        })
    }
}

/// The unit exchanged between parties: ciphertext plus consistency proof.
/// Never mutated after creation; verified then discarded by the decrypting
/// party.
///
/// Wire format: the ciphertext encoding followed by the proof encoding.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DrMessage<C: CurveGroup> {
    pub(crate) cipher: DrCiphertext<C>,
    pub(crate) proof: NizkProof<C>,
}

impl<C: CurveGroup> DrMessage<C> {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.cipher.to_bytes();
        out.extend_from_slice(&self.proof.to_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let cipher_len = 8 * encoding::point_len::<C>();
        if bytes.len() < cipher_len {
            return Err(Error::MalformedEncoding);
        }
        Ok(Self {
            cipher: DrCiphertext::from_bytes(&bytes[..cipher_len])?,
            proof: NizkProof::from_bytes(&bytes[cipher_len..])?,
        })
    }
}
