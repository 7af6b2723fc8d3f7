//! Deniable ring authentication: a 3-branch OR-proof of knowledge of the
//! discrete log of one of three public points, bound to an application
//! message. One branch is real, two are simulated; no third party can tell
//! which, so the proof authenticates without leaving a transferable trace.

use ark_ec::CurveGroup;
use ark_std::rand::RngCore;

use crate::{
    encoding::{self, Transcript},
    error::Error,
    sample, Params,
};

const CHALLENGE_DOMAIN: &[u8] = b"dre-auth:ring-auth";

/// A ring-authentication proof: six scalars, one per authenticated message.
///
/// Wire format: `c1 || r1 || c2 || r2 || c3 || r3`, fixed-width scalars.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sigma<C: CurveGroup> {
    pub(crate) c1: C::ScalarField,
    pub(crate) r1: C::ScalarField,
    pub(crate) c2: C::ScalarField,
    pub(crate) r2: C::ScalarField,
    pub(crate) c3: C::ScalarField,
    pub(crate) r3: C::ScalarField,
}

impl<C: CurveGroup> Sigma<C> {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6 * encoding::scalar_len::<C::ScalarField>());
        for s in [
            &self.c1, &self.r1, &self.c2, &self.r2, &self.c3, &self.r3,
        ] {
            out.extend_from_slice(&encoding::scalar_to_bytes(s));
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let n = encoding::scalar_len::<C::ScalarField>();
        if bytes.len() != 6 * n {
            return Err(Error::MalformedEncoding);
        }
        let mut chunks = bytes.chunks_exact(n);
        let mut next = || -> Result<C::ScalarField, Error> {
            encoding::scalar_from_bytes(chunks.next().ok_or(Error::MalformedEncoding)?)
        };
        Ok(Self {
            c1: next()?,
            r1: next()?,
            c2: next()?,
            r2: next()?,
            c3: next()?,
            r3: next()?,
        })
    }
}

/// Proves knowledge of `our_sec` with `our_pub = our_sec * g1`, hiding it
/// among `their_pub` and `their_pub_ecdh`, bound to `message`.
///
/// Needs five scalars of randomness; fails with
/// [`Error::EntropyExhausted`] and no partial sigma on a short read.
pub fn auth<C: CurveGroup, R: RngCore>(
    rng: &mut R,
    pp: &Params<C>,
    our_pub: &C,
    their_pub: &C,
    their_pub_ecdh: &C,
    our_sec: &C::ScalarField,
    message: &[u8],
) -> Result<Sigma<C>, Error> {
    let s = sample::rand_scalars::<C::ScalarField, _>(rng, 5)?;
    let (t1, c2, c3, r2, r3) = (s[0], s[1], s[2], s[3], s[4]);

    // real branch commitment
    let pt1 = pp.g1 * t1;
    // simulated branches
    let pt2 = pp.g1 * r2 + *their_pub * c2;
    let pt3 = pp.g1 * r3 + *their_pub_ecdh * c3;

    let c = ring_challenge(
        pp,
        our_pub,
        their_pub,
        their_pub_ecdh,
        &pt1,
        &pt2,
        &pt3,
        message,
    );

    // c1 = c - c2 - c3, r1 = t1 - c1 * our_sec (mod q)
    let c1 = c - c2 - c3;
    let r1 = t1 - c1 * *our_sec;

    Ok(Sigma {
        c1,
        r1,
        c2,
        r2,
        c3,
        r3,
    })
}

/// Verifies a ring-authentication proof over `message`.
///
/// The point order swaps roles relative to [`auth`]: the verifier's
/// `(their_pub, our_pub, our_pub_ecdh)` are the same three physical points
/// the prover passed as `(our_pub, their_pub, their_pub_ecdh)`. Returns
/// `false` on any mismatch; never errors on well-formed input.
pub fn verify<C: CurveGroup>(
    pp: &Params<C>,
    their_pub: &C,
    our_pub: &C,
    our_pub_ecdh: &C,
    sigma: &Sigma<C>,
    message: &[u8],
) -> bool {
    let Sigma {
        c1,
        r1,
        c2,
        r2,
        c3,
        r3,
    } = *sigma;

    // pti = g1 * ri + Pi * ci
    let pt1 = pp.g1 * r1 + *their_pub * c1;
    let pt2 = pp.g1 * r2 + *our_pub * c2;
    let pt3 = pp.g1 * r3 + *our_pub_ecdh * c3;

    let c = ring_challenge(
        pp,
        their_pub,
        our_pub,
        our_pub_ecdh,
        &pt1,
        &pt2,
        &pt3,
        message,
    );

    c == c1 + c2 + c3
}

/// Challenge over `g1 || q || A || B || C || pt1 || pt2 || pt3 || message`.
#[allow(clippy::too_many_arguments)]
fn ring_challenge<C: CurveGroup>(
    pp: &Params<C>,
    pub_a: &C,
    pub_b: &C,
    pub_c: &C,
    pt1: &C,
    pt2: &C,
    pt3: &C,
    message: &[u8],
) -> C::ScalarField {
    let mut t = Transcript::new(CHALLENGE_DOMAIN);
    t.append(&pp.g1);
    t.append_modulus::<C::ScalarField>();
    for p in [pub_a, pub_b, pub_c, pt1, pt2, pt3] {
        t.append(p);
    }
    t.append_bytes(message);
    t.challenge()
}
