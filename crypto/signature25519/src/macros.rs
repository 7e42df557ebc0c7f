/// `list_codec::Encode` and `list_codec::Decode` for a type whose encoding is exactly its
/// `bytes` field. Decoding applies the same length check as `$type::from_bytes`.
macro_rules! impl_codec {
    ($type: ident, $byte_size: expr) => {
        impl list_codec::Encode for $type {
            fn append_bytes(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.bytes)
            }

            fn encoded_len(&self) -> usize {
                $byte_size
            }
        }

        impl list_codec::Decode for $type {
            fn from_bytes(bytes: &[u8]) -> Result<Self, list_codec::DecodeError> {
                $type::from_bytes(bytes).map_err(Into::into)
            }
        }
    };
}

/// Conversions between `$type` and byte arrays or slices.
macro_rules! impl_byte_conversions {
    ($type: ident, $byte_size: expr) => {
        impl From<[u8; $byte_size]> for $type {
            fn from(bytes: [u8; $byte_size]) -> Self {
                Self { bytes }
            }
        }

        impl TryFrom<&[u8]> for $type {
            type Error = $crate::Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                $type::from_bytes(bytes)
            }
        }

        impl AsRef<[u8]> for $type {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }
    };
}

/// `0x`-prefixed hex `Display`, `Debug` and `FromStr` for `$type`.
macro_rules! impl_hex_string {
    ($type: ident) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "0x{}", hex::encode(self.bytes))
            }
        }

        impl std::fmt::Debug for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "0x{}", hex::encode(self.bytes))
            }
        }

        impl std::str::FromStr for $type {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let stripped = s
                    .strip_prefix("0x")
                    .ok_or_else(|| $crate::Error::InvalidHex("must start with 0x".to_string()))?;
                let bytes =
                    hex::decode(stripped).map_err(|e| $crate::Error::InvalidHex(e.to_string()))?;
                $type::from_bytes(&bytes)
            }
        }
    };
}

/// Serializes `$type` as its `0x`-prefixed hex string.
macro_rules! impl_serde {
    ($type: ident) => {
        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let string = <String as serde::Deserialize>::deserialize(deserializer)?;
                string
                    .parse::<Self>()
                    .map_err(|e| serde::de::Error::custom(format!("{:?}", e)))
            }
        }
    };
}
