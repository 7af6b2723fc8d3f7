use sha3::{Digest, Sha3_512};

/// One-shot derivation of the shared secret consumed by the socialist
/// millionaire comparison: `SHA3-512(initiator_fingerprint ||
/// receiver_fingerprint || ssid || secret)`. Stateless; the identifiers are
/// opaque to this crate.
pub fn derive_secret(
    initiator_fingerprint: &[u8],
    receiver_fingerprint: &[u8],
    ssid: &[u8],
    secret: &[u8],
) -> [u8; 64] {
    let mut h = Sha3_512::new();
    h.update(initiator_fingerprint);
    h.update(receiver_fingerprint);
    h.update(ssid);
    h.update(secret);

    let mut out = [0u8; 64];
    out.copy_from_slice(&h.finalize());
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_derive_secret_is_input_sensitive() {
        let base = derive_secret(b"fp-a", b"fp-b", b"ssid", b"secret");
        assert_eq!(base, derive_secret(b"fp-a", b"fp-b", b"ssid", b"secret"));
        assert_ne!(base, derive_secret(b"fp-b", b"fp-a", b"ssid", b"secret"));
        assert_ne!(base, derive_secret(b"fp-a", b"fp-b", b"ssid", b"secre"));
    }
}
