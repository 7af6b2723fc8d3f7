use ark_ec::CurveGroup;

use crate::{encoding, error::Error};

/// A single-recipient Cramer-Shoup ciphertext of one group element.
///
/// Wire format: `u1 || u2 || e || v`, four fixed-width compressed points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ciphertext<C: CurveGroup> {
    pub(crate) u1: C,
    pub(crate) u2: C,
    pub(crate) e: C,
    pub(crate) v: C,
}

impl<C: CurveGroup> Ciphertext<C> {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 * encoding::point_len::<C>());
        for p in [&self.u1, &self.u2, &self.e, &self.v] {
            out.extend_from_slice(&encoding::point_to_bytes(p));
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let n = encoding::point_len::<C>();
        if bytes.len() != 4 * n {
            return Err(Error::MalformedEncoding);
        }
        Ok(Self {
            u1: encoding::point_from_bytes(&bytes[..n])?,
            u2: encoding::point_from_bytes(&bytes[n..2 * n])?,
            e: encoding::point_from_bytes(&bytes[2 * n..3 * n])?,
            v: encoding::point_from_bytes(&bytes[3 * n..])?,
        })
    }
}
