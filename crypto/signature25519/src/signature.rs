use crate::{Ed25519Verifier, Error, PublicKey25519, PUBLIC_KEY_LENGTH};

/// The byte-length of an Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// A primitive which checks a signature over a message against a public key.
///
/// Implementations must return `false`, rather than panic, for any input that is not a valid
/// signature, including bytes which are not a curve point at all.
pub trait TSignatureVerifier {
    /// Returns `true` if `signature` is a signature across `message` by `public_key`.
    fn verify(
        &self,
        signature: &[u8; SIGNATURE_LENGTH],
        message: &[u8],
        public_key: &[u8; PUBLIC_KEY_LENGTH],
    ) -> bool;
}

impl<F> TSignatureVerifier for F
where
    F: Fn(&[u8; SIGNATURE_LENGTH], &[u8], &[u8; PUBLIC_KEY_LENGTH]) -> bool,
{
    fn verify(
        &self,
        signature: &[u8; SIGNATURE_LENGTH],
        message: &[u8],
        public_key: &[u8; PUBLIC_KEY_LENGTH],
    ) -> bool {
        self(signature, message, public_key)
    }
}

/// A signature of exactly `SIGNATURE_LENGTH` bytes.
///
/// The bytes are owned by the signature and cannot be changed after creation. Two signatures are
/// equal if and only if their bytes are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature25519 {
    bytes: [u8; SIGNATURE_LENGTH],
}

impl Signature25519 {
    /// Copies `bytes` into a new signature.
    ///
    /// Fails with `Error::InvalidLength` unless `bytes.len() == SIGNATURE_LENGTH`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidLength {
            got: bytes.len(),
            expected: SIGNATURE_LENGTH,
        })?;
        Ok(Self { bytes })
    }

    /// Returns a copy of the signature bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.bytes
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Returns `true` if `self` is an Ed25519 signature across `message` by `public_key`.
    pub fn is_valid(&self, public_key: &PublicKey25519, message: &[u8]) -> bool {
        self.is_valid_with(&Ed25519Verifier, public_key, message)
    }

    /// As `is_valid`, but defers the check to `verifier`.
    pub fn is_valid_with<V>(
        &self,
        verifier: &V,
        public_key: &PublicKey25519,
        message: &[u8],
    ) -> bool
    where
        V: TSignatureVerifier + ?Sized,
    {
        verifier.verify(&self.bytes, message, public_key.as_bytes())
    }
}

impl_codec!(Signature25519, SIGNATURE_LENGTH);
impl_byte_conversions!(Signature25519, SIGNATURE_LENGTH);
impl_hex_string!(Signature25519);
impl_serde!(Signature25519);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FakeVerifier;
    use list_codec::{Decode, DecodeError, Encode};
    use std::collections::HashSet;

    #[test]
    fn construction_requires_exact_length() {
        for len in [0, SIGNATURE_LENGTH - 1, SIGNATURE_LENGTH + 1, 2 * SIGNATURE_LENGTH] {
            assert_eq!(
                Signature25519::from_bytes(&vec![1; len]),
                Err(Error::InvalidLength {
                    got: len,
                    expected: SIGNATURE_LENGTH
                })
            );
        }
        assert!(Signature25519::from_bytes(&[1; SIGNATURE_LENGTH]).is_ok());
    }

    #[test]
    fn decode_requires_exact_length() {
        assert_eq!(
            <Signature25519 as Decode>::from_bytes(&[0; SIGNATURE_LENGTH - 1]),
            Err(DecodeError::InvalidLength {
                got: SIGNATURE_LENGTH - 1,
                expected: SIGNATURE_LENGTH
            })
        );
    }

    #[test]
    fn construction_copies_input() {
        let mut input = vec![3; SIGNATURE_LENGTH];
        let signature = Signature25519::from_bytes(&input).unwrap();
        input[0] = 4;

        let mut output = signature.to_bytes();
        output[1] = 5;

        assert_eq!(signature.to_bytes(), [3; SIGNATURE_LENGTH]);
    }

    #[test]
    fn encoding_is_raw_bytes() {
        let signature = Signature25519::from([9; SIGNATURE_LENGTH]);
        assert_eq!(signature.as_encoded_bytes(), vec![9; SIGNATURE_LENGTH]);
        assert_eq!(signature.encoded_len(), SIGNATURE_LENGTH);
    }

    #[test]
    fn equality_and_hash_follow_bytes() {
        let a = Signature25519::from([1; SIGNATURE_LENGTH]);
        let b = Signature25519::from_bytes(&[1; SIGNATURE_LENGTH]).unwrap();
        let c = Signature25519::from([2; SIGNATURE_LENGTH]);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn injected_verifier_receives_all_inputs() {
        let signature = Signature25519::from([1; SIGNATURE_LENGTH]);
        let public_key = PublicKey25519::from([2; PUBLIC_KEY_LENGTH]);

        let verifier = |sig: &[u8; SIGNATURE_LENGTH], msg: &[u8], pk: &[u8; PUBLIC_KEY_LENGTH]| {
            sig == &[1; SIGNATURE_LENGTH] && msg == b"message" && pk == &[2; PUBLIC_KEY_LENGTH]
        };

        assert!(signature.is_valid_with(&verifier, &public_key, b"message"));
        assert!(!signature.is_valid_with(&verifier, &public_key, b"other"));
        assert!(signature.is_valid_with(&FakeVerifier, &public_key, b"other"));
    }

    #[test]
    fn garbage_is_not_valid() {
        let signature = Signature25519::from([0xff; SIGNATURE_LENGTH]);
        let public_key = PublicKey25519::from([0xff; PUBLIC_KEY_LENGTH]);
        assert!(!signature.is_valid(&public_key, b"message"));
    }

    #[test]
    fn hex_string() {
        let signature = Signature25519::from([0xab; SIGNATURE_LENGTH]);
        let string = signature.to_string();

        assert_eq!(string, format!("0x{}", "ab".repeat(SIGNATURE_LENGTH)));
        assert_eq!(format!("{:?}", signature), string);
        assert_eq!(string.parse::<Signature25519>(), Ok(signature));

        assert!(matches!(
            "ab".repeat(SIGNATURE_LENGTH).parse::<Signature25519>(),
            Err(Error::InvalidHex(_))
        ));
        assert_eq!(
            "0xabab".parse::<Signature25519>(),
            Err(Error::InvalidLength {
                got: 2,
                expected: SIGNATURE_LENGTH
            })
        );
    }
}
