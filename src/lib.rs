#![doc = include_str!("../README.md")]

pub mod ciphertext;
pub use ciphertext::Ciphertext;
pub mod decrypt;
pub use decrypt::DecryptKey;
pub mod dual_receiver;
pub use dual_receiver::{DrCiphertext, DrMessage, NizkProof, Party};
pub(crate) mod encoding;
pub mod encrypt;
pub use encrypt::EncryptKey;
pub mod error;
pub use error::Error;
pub mod key_gen;
pub use key_gen::key_gen;
pub mod params;
pub use params::Params;
pub mod ring;
pub use ring::{auth, verify, Sigma};
pub mod sample;
pub mod secret;
pub use secret::derive_secret;

#[cfg(test)]
pub(crate) mod testutil;
