use ark_ec::CurveGroup;
use ark_std::{rand::Rng, UniformRand};

/// Group parameters shared by every party: the designated base generator
/// `g1` and a second generator `g2` whose discrete log relative to `g1` is
/// unknown to everyone.
#[derive(Clone, Copy, Debug)]
pub struct Params<C: CurveGroup> {
    pub(crate) g1: C,
    pub(crate) g2: C,
}

impl<C: CurveGroup> Params<C> {
    pub fn rand<R: Rng>(rng: &mut R) -> Self {
        Self {
            g1: C::generator(),
            g2: C::rand(rng),
        }
    }

    pub fn g1(&self) -> C {
        self.g1
    }

    pub fn g2(&self) -> C {
        self.g2
    }
}
