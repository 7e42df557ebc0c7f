//! Provides encoding and decoding of ordered lists of elements into a single self-delimiting byte
//! buffer.
//!
//! An encoded list has the layout:
//!
//! ```text
//! count            : u32 (big-endian)          number of elements
//! length[0..count) : u32 (big-endian) * count  byte length of each element, in order
//! payload          : bytes                     concatenation of the element bytes, in order
//! ```
//!
//! The total buffer length must be exactly `4 + 4 * count + sum(length)`. All integers must fit
//! in an `i32` so the format can be shared with readers using signed 32-bit integers.
//!
//! Every element of a list is handled by one `ElementCodec`. Any type implementing `Encode` and
//! `Decode` can be used through `NativeCodec`.
//!
//! ## Example
//!
//! ```rust
//! use list_codec::{ListCodec, NativeCodec};
//!
//! let codec = ListCodec::new(NativeCodec::<Vec<u8>>::new());
//!
//! let items = vec![b"ab".to_vec(), vec![], b"xyz".to_vec()];
//! let bytes = codec.encode(&items);
//!
//! assert_eq!(&bytes[0..4], &[0, 0, 0, 3]);
//! assert_eq!(codec.decode(&bytes), Ok(items));
//! ```
mod codec;
mod config;
mod decode;
mod encode;
mod impls;
mod list;
pub mod metrics;

pub use codec::{ElementCodec, NativeCodec};
pub use config::Config;
pub use decode::{read_length, Corruption, Decode, DecodeError};
pub use encode::{encode_length, Encode, EncodeError};
pub use list::{ListCodec, NativeListCodec};

/// The number of bytes used for the element count and for each entry of the length table.
pub const BYTES_PER_LENGTH_PREFIX: usize = 4;

/// The largest count or element length representable in an encoded list.
pub const MAX_LENGTH_VALUE: usize = i32::MAX as usize;

/// Convenience function to encode a single value with its native codec.
pub fn encode<T: Encode>(value: &T) -> Vec<u8> {
    value.as_encoded_bytes()
}

/// Convenience function to decode a single value with its native codec.
pub fn decode<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    T::from_bytes(bytes)
}
