//! Implementations of `TSignatureVerifier`.
pub mod dalek;
pub mod fake_crypto;
