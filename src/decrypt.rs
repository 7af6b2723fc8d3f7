use ark_ec::CurveGroup;
use subtle::ConstantTimeEq;

use crate::{ciphertext::Ciphertext, encoding, encrypt::alpha_scalar, error::Error};

/// Cramer-Shoup private key, five scalars. Never serialized; owned
/// exclusively by its holder.
#[derive(Clone, Debug)]
pub struct DecryptKey<C: CurveGroup> {
    pub(crate) x1: C::ScalarField,
    pub(crate) x2: C::ScalarField,
    pub(crate) y1: C::ScalarField,
    pub(crate) y2: C::ScalarField,
    pub(crate) z: C::ScalarField,
}

impl<C: CurveGroup> DecryptKey<C> {
    /// Decrypts one ciphertext, returning the encoded plaintext point.
    ///
    /// The tag check `v == u1*x1 + u2*x2 + alpha*(u1*y1 + u2*y2)` gates the
    /// release of the plaintext and runs in constant time over the encoded
    /// points.
    pub fn decrypt(&self, c: &Ciphertext<C>) -> Result<Vec<u8>, Error> {
        // alpha = H(u1 || u2 || e)
        let alpha = alpha_scalar(&c.u1, &c.u2, &c.e);

        // a = u1 * x1 + u2 * x2
        // b = u1 * y1 + u2 * y2
        // v' = a + b * alpha
        let a = c.u1 * self.x1 + c.u2 * self.x2;
        let b = c.u1 * self.y1 + c.u2 * self.y2;
        let v = a + b * alpha;

        let expected = encoding::point_to_bytes(&v);
        let actual = encoding::point_to_bytes(&c.v);
        if !bool::from(expected.as_slice().ct_eq(actual.as_slice())) {
            return Err(Error::VerificationFailed);
        }

        // m = e - u1 * z
        let m = c.e - c.u1 * self.z;
        Ok(encoding::point_to_bytes(&m))
    }
}
