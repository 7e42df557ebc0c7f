use super::{BYTES_PER_LENGTH_PREFIX, MAX_LENGTH_VALUE};

/// Returned when some bytes cannot be decoded into a value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DecodeError {
    /// A fixed-length value was given the wrong number of bytes.
    InvalidLength { got: usize, expected: usize },
    /// The buffer is structurally inconsistent, or one of its elements failed to decode.
    Corrupted(Corruption),
    /// The declared element count is larger than the configured maximum.
    TooManyElements { count: usize, max: usize },
    /// The bytes have the right shape but do not represent a valid value.
    BytesInvalid(String),
}

/// Describes which structural check of an encoded list failed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Corruption {
    /// Fewer bytes than a length prefix.
    BufferTooShort { len: usize },
    /// The buffer cannot hold the length table for `count` elements.
    LengthTableTruncated { count: usize, len: usize },
    /// A length prefix at `offset` does not fit in an `i32`.
    LengthOutOfRange { offset: usize, value: u32 },
    /// The length table does not account for exactly the bytes in the buffer.
    LengthMismatch { expected: usize, actual: usize },
    /// The element at `index` was rejected by its codec.
    InvalidElement { index: usize, error: Box<DecodeError> },
}

impl DecodeError {
    /// A short, static name for the error variant. Used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidLength { .. } => "invalid_length",
            DecodeError::Corrupted(_) => "corrupted",
            DecodeError::TooManyElements { .. } => "too_many_elements",
            DecodeError::BytesInvalid(_) => "bytes_invalid",
        }
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, DecodeError::Corrupted(_))
    }
}

impl From<Corruption> for DecodeError {
    fn from(c: Corruption) -> Self {
        DecodeError::Corrupted(c)
    }
}

/// Provides decoding of a value from exactly the bytes produced by its `Encode` impl.
pub trait Decode: Sized {
    /// Attempts to decode `Self` from `bytes`, returning a `DecodeError` on failure.
    ///
    /// Must consume all of `bytes`. Must never panic, regardless of the input.
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError>;
}

/// Reads the 4-byte big-endian length prefix starting at `offset`.
///
/// Fails with `Corruption::BufferTooShort` if `bytes` ends before the prefix does and with
/// `Corruption::LengthOutOfRange` if the value is larger than `i32::MAX`.
pub fn read_length(bytes: &[u8], offset: usize) -> Result<usize, DecodeError> {
    let end = offset
        .checked_add(BYTES_PER_LENGTH_PREFIX)
        .ok_or(Corruption::BufferTooShort { len: bytes.len() })?;

    let prefix: [u8; BYTES_PER_LENGTH_PREFIX] = bytes
        .get(offset..end)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(Corruption::BufferTooShort { len: bytes.len() })?;

    let value = u32::from_be_bytes(prefix);
    if value as usize > MAX_LENGTH_VALUE {
        return Err(Corruption::LengthOutOfRange { offset, value }.into());
    }

    Ok(value as usize)
}
