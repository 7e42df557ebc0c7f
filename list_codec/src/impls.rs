use super::*;

/// The raw bytes are the encoding; no framing is added since the list supplies the length.
impl Encode for Vec<u8> {
    fn append_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }

    fn encoded_len(&self) -> usize {
        self.len()
    }
}

impl Decode for Vec<u8> {
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(bytes.to_vec())
    }
}

impl Encode for String {
    fn append_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }

    fn encoded_len(&self) -> usize {
        self.len()
    }
}

impl Decode for String {
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| DecodeError::BytesInvalid(e.to_string()))
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn append_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }

    fn encoded_len(&self) -> usize {
        N
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        bytes.try_into().map_err(|_| DecodeError::InvalidLength {
            got: bytes.len(),
            expected: N,
        })
    }
}

macro_rules! impl_for_bigendian_uint {
    ($type: ident, $byte_len: expr) => {
        impl Encode for $type {
            fn append_bytes(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.to_be_bytes());
            }

            fn encoded_len(&self) -> usize {
                $byte_len
            }
        }

        impl Decode for $type {
            fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
                <[u8; $byte_len]>::from_bytes(bytes).map($type::from_be_bytes)
            }
        }
    };
}

impl_for_bigendian_uint!(u32, 4);
impl_for_bigendian_uint!(u64, 8);
