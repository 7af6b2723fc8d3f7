//! Fixed-width encodings and hash transcripts.
//!
//! Every multi-field wire structure in this crate is an ordered
//! concatenation of the fixed-width compressed encodings below, with no
//! framing or length prefixes. Fiat-Shamir challenges are derived by
//! appending the same encodings to a domain-separated SHAKE256 transcript
//! and squeezing one field element.

use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::CanonicalSerialize;
use ark_std::Zero;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use crate::error::Error;

/// Width in bytes of one encoded scalar.
pub(crate) fn scalar_len<F: PrimeField>() -> usize {
    (F::MODULUS_BIT_SIZE as usize).div_ceil(8)
}

/// Width in bytes of one compressed point.
pub(crate) fn point_len<C: CurveGroup>() -> usize {
    C::zero().compressed_size()
}

pub(crate) fn point_to_bytes<C: CurveGroup>(p: &C) -> Vec<u8> {
    let mut buf = Vec::with_capacity(p.compressed_size());
    p.serialize_compressed(&mut buf)
        .expect("serializing into a Vec is infallible");
    buf
}

/// Decodes one compressed point, rejecting wrong-length and invalid
/// encodings.
pub(crate) fn point_from_bytes<C: CurveGroup>(bytes: &[u8]) -> Result<C, Error> {
    if bytes.len() != point_len::<C>() {
        return Err(Error::MalformedEncoding);
    }
    C::deserialize_compressed(bytes).map_err(Error::from)
}

pub(crate) fn scalar_to_bytes<F: PrimeField>(s: &F) -> Vec<u8> {
    let mut buf = Vec::with_capacity(s.compressed_size());
    s.serialize_compressed(&mut buf)
        .expect("serializing into a Vec is infallible");
    buf
}

pub(crate) fn scalar_from_bytes<F: PrimeField>(bytes: &[u8]) -> Result<F, Error> {
    if bytes.len() != scalar_len::<F>() {
        return Err(Error::MalformedEncoding);
    }
    F::deserialize_compressed(bytes).map_err(Error::from)
}

/// Hashes `input` to a scalar under a domain label.
pub(crate) fn hash_to_scalar<F: PrimeField>(label: &[u8], input: &[u8]) -> F {
    let mut t = Transcript::new(label);
    t.append_bytes(input);
    t.challenge()
}

/// A SHAKE256 transcript. Values are absorbed in call order as their
/// fixed-width encodings; the order per protocol step is part of the wire
/// contract.
pub(crate) struct Transcript {
    xof: Shake256,
}

impl Transcript {
    pub(crate) fn new(label: &[u8]) -> Self {
        let mut xof = Shake256::default();
        xof.update(label);
        Self { xof }
    }

    pub(crate) fn append<T: CanonicalSerialize>(&mut self, value: &T) {
        let mut buf = Vec::with_capacity(value.compressed_size());
        value
            .serialize_compressed(&mut buf)
            .expect("serializing into a Vec is infallible");
        self.xof.update(&buf);
    }

    pub(crate) fn append_bytes(&mut self, bytes: &[u8]) {
        self.xof.update(bytes);
    }

    /// Absorbs the group order `q`, big-endian.
    pub(crate) fn append_modulus<F: PrimeField>(&mut self) {
        self.xof.update(&F::MODULUS.to_bytes_be());
    }

    /// Squeezes one field element of output and reduces it mod `q`.
    pub(crate) fn challenge<F: PrimeField>(self) -> F {
        let mut reader = self.xof.finalize_xof();
        let mut buf = vec![0u8; scalar_len::<F>()];
        reader.read(&mut buf);
        F::from_be_bytes_mod_order(&buf)
    }
}
