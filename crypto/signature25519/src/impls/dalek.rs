use crate::{TSignatureVerifier, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Verifies Ed25519 signatures with `ed25519-dalek`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl TSignatureVerifier for Ed25519Verifier {
    fn verify(
        &self,
        signature: &[u8; SIGNATURE_LENGTH],
        message: &[u8],
        public_key: &[u8; PUBLIC_KEY_LENGTH],
    ) -> bool {
        // Keys which do not decompress to a curve point cannot have signed anything.
        let Ok(public_key) = VerifyingKey::from_bytes(public_key) else {
            return false;
        };

        public_key
            .verify(message, &Signature::from_bytes(signature))
            .is_ok()
    }
}
