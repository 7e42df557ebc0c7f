use crate::Error;

/// The byte-length of an Ed25519 public key.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// The public key a `Signature25519` is verified against.
///
/// Opaque: the bytes are not checked to be a valid curve point until they are used by a
/// `TSignatureVerifier`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey25519 {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl PublicKey25519 {
    /// Copies `bytes` into a new public key.
    ///
    /// Fails with `Error::InvalidLength` unless `bytes.len() == PUBLIC_KEY_LENGTH`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidLength {
            got: bytes.len(),
            expected: PUBLIC_KEY_LENGTH,
        })?;
        Ok(Self { bytes })
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.bytes
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }
}

impl_codec!(PublicKey25519, PUBLIC_KEY_LENGTH);
impl_byte_conversions!(PublicKey25519, PUBLIC_KEY_LENGTH);
impl_hex_string!(PublicKey25519);
impl_serde!(PublicKey25519);
