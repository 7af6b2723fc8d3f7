use ark_serialize::SerializationError;

/// Errors reported by key generation, encryption, decryption and proof
/// generation. All of these are recoverable conditions for the caller;
/// retrying with fresh randomness is a caller decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The randomness source could not supply the bytes needed for one or
    /// more scalars. No partial key, ciphertext or proof is returned.
    #[error("cannot source enough entropy")]
    EntropyExhausted,

    /// An integrity check did not hold: the Cramer-Shoup tag mismatched, or
    /// the dual-receiver consistency proof failed. No plaintext is released.
    #[error("verification of cipher failed")]
    VerificationFailed,

    /// A point or scalar byte string has the wrong length or does not decode
    /// to a valid group element.
    #[error("malformed point or scalar encoding")]
    MalformedEncoding,
}

impl From<SerializationError> for Error {
    fn from(_: SerializationError) -> Self {
        Error::MalformedEncoding
    }
}
