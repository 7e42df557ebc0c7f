use super::{BYTES_PER_LENGTH_PREFIX, MAX_LENGTH_VALUE};

/// Returned when a list cannot be represented in the length-prefixed format.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EncodeError {
    /// The list has more elements than a length prefix can express.
    ListTooLong { count: usize },
    /// The element at `index` encodes to more bytes than a length prefix can express.
    ElementTooLong { index: usize, len: usize },
}

/// Provides the byte representation of a value when it is stored as a list element.
///
/// Encoding is total: every in-memory value must have a representation.
pub trait Encode {
    /// Append the encoding of `self` to `buf`.
    fn append_bytes(&self, buf: &mut Vec<u8>);

    /// The number of bytes `append_bytes` will write.
    fn encoded_len(&self) -> usize;

    /// Returns the encoding of `self` as a new `Vec`.
    fn as_encoded_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.append_bytes(&mut buf);
        buf
    }
}

/// Encode `len` as a 4-byte big-endian length prefix.
///
/// ## Panics
///
/// If `len > MAX_LENGTH_VALUE`.
pub fn encode_length(len: usize) -> [u8; BYTES_PER_LENGTH_PREFIX] {
    assert!(
        len <= MAX_LENGTH_VALUE,
        "length {} exceeds the maximum of {}",
        len,
        MAX_LENGTH_VALUE
    );
    (len as u32).to_be_bytes()
}
