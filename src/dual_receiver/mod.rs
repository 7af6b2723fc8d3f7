//! Dual-receiver encryption: two linked Cramer-Shoup ciphertexts of the same
//! plaintext, one per recipient, plus a NIZK proof that both halves agree.

pub(crate) mod ciphertext;
pub use ciphertext::*;
pub(crate) mod decrypt;
pub use decrypt::*;
pub(crate) mod encrypt;
pub(crate) mod nizk;
pub use nizk::NizkProof;
