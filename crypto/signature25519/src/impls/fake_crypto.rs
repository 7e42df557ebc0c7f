use crate::{TSignatureVerifier, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// A verifier which accepts every signature.
///
/// Only useful for tests which need structurally valid signatures without signing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeVerifier;

impl TSignatureVerifier for FakeVerifier {
    fn verify(
        &self,
        _signature: &[u8; SIGNATURE_LENGTH],
        _message: &[u8],
        _public_key: &[u8; PUBLIC_KEY_LENGTH],
    ) -> bool {
        true
    }
}
