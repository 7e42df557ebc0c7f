use crate::{Decode, DecodeError, Encode};
use std::fmt;
use std::marker::PhantomData;

/// The encode/decode pair used by a `ListCodec` for each of its elements.
///
/// Implementors must ensure `decode(&encode(item))` returns a value equal to `item` and that
/// `decode` fails, rather than panics, on any input it does not accept.
pub trait ElementCodec {
    type Item;

    fn encode(&self, item: &Self::Item) -> Vec<u8>;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Item, DecodeError>;
}

/// An `ElementCodec` which defers to the `Encode` and `Decode` impls of `T`.
pub struct NativeCodec<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> NativeCodec<T> {
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for NativeCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NativeCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for NativeCodec<T> {}

impl<T> fmt::Debug for NativeCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeCodec<{}>", std::any::type_name::<T>())
    }
}

impl<T: Encode + Decode> ElementCodec for NativeCodec<T> {
    type Item = T;

    fn encode(&self, item: &T) -> Vec<u8> {
        item.as_encoded_bytes()
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        T::from_bytes(bytes)
    }
}
