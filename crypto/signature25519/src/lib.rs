//! Fixed-length Ed25519 signatures and the public keys they are verified against.
//!
//! Both types are plain byte containers whose length is checked when they are created, so a
//! value of either type always holds exactly `SIGNATURE_LENGTH` or `PUBLIC_KEY_LENGTH` bytes.
//! Neither type performs any curve arithmetic when it is created or decoded. Verification is
//! deferred to a `TSignatureVerifier`, by default `Ed25519Verifier`.
//!
//! Both types implement `list_codec::{Encode, Decode}` with their raw bytes as the encoding, so
//! they may be stored in a `list_codec::ListCodec`.
#[macro_use]
mod macros;
pub mod impls;
mod public_key;
mod signature;

pub use impls::{dalek::Ed25519Verifier, fake_crypto::FakeVerifier};
pub use public_key::{PublicKey25519, PUBLIC_KEY_LENGTH};
pub use signature::{Signature25519, TSignatureVerifier, SIGNATURE_LENGTH};

use list_codec::DecodeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input was not exactly as long as the value it should represent.
    InvalidLength { got: usize, expected: usize },
    /// A string form was not `0x`-prefixed hex.
    InvalidHex(String),
}

impl From<Error> for DecodeError {
    fn from(e: Error) -> DecodeError {
        match e {
            Error::InvalidLength { got, expected } => DecodeError::InvalidLength { got, expected },
            Error::InvalidHex(e) => DecodeError::BytesInvalid(e),
        }
    }
}
