use crate::metrics;
use crate::{
    encode_length, read_length, Config, Corruption, DecodeError, ElementCodec, EncodeError,
    NativeCodec, BYTES_PER_LENGTH_PREFIX, MAX_LENGTH_VALUE,
};
use slog::{debug, trace, Logger};
use std::fmt;

/// A `ListCodec` for any type implementing `Encode` and `Decode`.
pub type NativeListCodec<T> = ListCodec<NativeCodec<T>>;

/// Encodes and decodes ordered lists whose elements all share one `ElementCodec`.
///
/// The codec holds no mutable state, so a single instance may be shared between threads.
///
/// ## Wire format
///
/// `[count][length_0]..[length_{count-1}][element_0]..[element_{count-1}]`, where `count` and each
/// `length_i` are 4-byte big-endian integers no larger than `i32::MAX`.
#[derive(Clone)]
pub struct ListCodec<C> {
    element_codec: C,
    /// `0` means unlimited.
    max_list_length: usize,
    log: Logger,
}

impl<C: ElementCodec> ListCodec<C> {
    /// Create a codec that accepts lists of any length.
    pub fn new(element_codec: C) -> Self {
        Self::from_config(element_codec, &Config::default())
    }

    /// Create a codec that rejects encoded lists declaring more than `max_list_length` elements.
    ///
    /// A `max_list_length` of `0` means unlimited.
    pub fn with_max_list_length(element_codec: C, max_list_length: usize) -> Self {
        Self::from_config(element_codec, &Config::with_max_list_length(max_list_length))
    }

    pub fn from_config(element_codec: C, config: &Config) -> Self {
        Self {
            element_codec,
            max_list_length: config.max_list_length,
            log: logging::null_logger(),
        }
    }

    /// Log rejected inputs to `log`.
    pub fn with_logger(mut self, log: Logger) -> Self {
        self.log = log;
        self
    }

    pub fn element_codec(&self) -> &C {
        &self.element_codec
    }

    /// Returns the decode limit, or `None` if lists of any length are accepted.
    pub fn max_list_length(&self) -> Option<usize> {
        Config::with_max_list_length(self.max_list_length).limit()
    }

    /// Encode `items`, in order.
    ///
    /// The maximum list length is not applied here, only when decoding.
    ///
    /// ## Panics
    ///
    /// If the number of items, or the encoded length of any item, exceeds `MAX_LENGTH_VALUE`. Use
    /// `try_encode` to handle those cases.
    pub fn encode(&self, items: &[C::Item]) -> Vec<u8> {
        let encoded = items
            .iter()
            .map(|item| self.element_codec.encode(item))
            .collect::<Vec<_>>();

        self.concat(&encoded)
    }

    /// As `encode`, but returns an error instead of panicking when a count or length cannot be
    /// represented.
    pub fn try_encode(&self, items: &[C::Item]) -> Result<Vec<u8>, EncodeError> {
        if items.len() > MAX_LENGTH_VALUE {
            return Err(EncodeError::ListTooLong { count: items.len() });
        }

        let encoded = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let bytes = self.element_codec.encode(item);
                if bytes.len() > MAX_LENGTH_VALUE {
                    Err(EncodeError::ElementTooLong {
                        index,
                        len: bytes.len(),
                    })
                } else {
                    Ok(bytes)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.concat(&encoded))
    }

    fn concat(&self, encoded: &[Vec<u8>]) -> Vec<u8> {
        let payload_len: usize = encoded.iter().map(Vec::len).sum();
        let mut buf = Vec::with_capacity(
            BYTES_PER_LENGTH_PREFIX * (encoded.len() + 1) + payload_len,
        );

        buf.extend_from_slice(&encode_length(encoded.len()));
        for element in encoded {
            buf.extend_from_slice(&encode_length(element.len()));
        }
        for element in encoded {
            buf.extend_from_slice(element);
        }

        metrics::inc_counter(&metrics::LIST_ENCODE_TOTAL);
        metrics::inc_counter_by(&metrics::LIST_ENCODE_ELEMENTS_TOTAL, encoded.len() as u64);
        trace!(
            self.log,
            "Encoded list";
            "elements" => encoded.len(),
            "bytes" => buf.len(),
        );

        buf
    }

    /// Decode a list previously produced by `encode`.
    ///
    /// Either every element decodes and the elements are returned in their encoded order, or an
    /// error is returned. Never panics.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<C::Item>, DecodeError> {
        metrics::inc_counter(&metrics::LIST_DECODE_TOTAL);
        let timer = metrics::start_timer(&metrics::LIST_DECODE_TIMES);

        let result = self.decode_elements(bytes);

        metrics::stop_timer(timer);

        match &result {
            Ok(items) => trace!(
                self.log,
                "Decoded list";
                "elements" => items.len(),
                "bytes" => bytes.len(),
            ),
            Err(e) => {
                metrics::inc_counter_vec(&metrics::LIST_DECODE_FAILURES_TOTAL, &[e.kind()]);
                debug!(
                    self.log,
                    "Rejected encoded list";
                    "error" => ?e,
                    "bytes" => bytes.len(),
                    "max_list_length" => self.max_list_length,
                );
            }
        }

        result
    }

    /// Read the element count of an encoded list without decoding the rest of it.
    ///
    /// Applies the maximum list length, so an `Ok` count is one `decode` is willing to process.
    pub fn decode_count(&self, bytes: &[u8]) -> Result<usize, DecodeError> {
        if bytes.len() < BYTES_PER_LENGTH_PREFIX {
            return Err(Corruption::BufferTooShort { len: bytes.len() }.into());
        }

        let count = read_length(bytes, 0)?;

        match self.max_list_length() {
            Some(max) if count > max => Err(DecodeError::TooManyElements { count, max }),
            _ => Ok(count),
        }
    }

    fn decode_elements(&self, bytes: &[u8]) -> Result<Vec<C::Item>, DecodeError> {
        // The count is checked against the limit before anything is allocated for it.
        let count = self.decode_count(bytes)?;

        let table_end = count
            .checked_add(1)
            .and_then(|n| n.checked_mul(BYTES_PER_LENGTH_PREFIX))
            .filter(|end| *end <= bytes.len())
            .ok_or(Corruption::LengthTableTruncated {
                count,
                len: bytes.len(),
            })?;

        // `count <= bytes.len() / 4` from here on.
        let mut lengths = Vec::with_capacity(count);
        let mut payload_len: usize = 0;
        for offset in (BYTES_PER_LENGTH_PREFIX..table_end).step_by(BYTES_PER_LENGTH_PREFIX) {
            let len = read_length(bytes, offset)?;
            payload_len = payload_len.saturating_add(len);
            lengths.push(len);
        }

        let expected = table_end.saturating_add(payload_len);
        if expected != bytes.len() {
            return Err(Corruption::LengthMismatch {
                expected,
                actual: bytes.len(),
            }
            .into());
        }

        let mut items = Vec::with_capacity(count);
        let mut offset = table_end;
        for (index, len) in lengths.into_iter().enumerate() {
            let element_bytes = offset
                .checked_add(len)
                .and_then(|end| bytes.get(offset..end))
                .ok_or(Corruption::LengthMismatch {
                    expected,
                    actual: bytes.len(),
                })?;

            let item = self
                .element_codec
                .decode(element_bytes)
                .map_err(|error| Corruption::InvalidElement {
                    index,
                    error: Box::new(error),
                })?;

            items.push(item);
            offset += len;
        }

        Ok(items)
    }
}

/// Lists of lists are encoded by using a `ListCodec` as the element codec of another.
impl<C: ElementCodec> ElementCodec for ListCodec<C> {
    type Item = Vec<C::Item>;

    fn encode(&self, item: &Self::Item) -> Vec<u8> {
        ListCodec::encode(self, item)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Self::Item, DecodeError> {
        ListCodec::decode(self, bytes)
    }
}

impl<C: fmt::Debug> fmt::Debug for ListCodec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCodec")
            .field("element_codec", &self.element_codec)
            .field("max_list_length", &self.max_list_length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_codec() -> NativeListCodec<Vec<u8>> {
        ListCodec::new(NativeCodec::new())
    }

    #[test]
    fn encode_layout() {
        let items = vec![b"ab".to_vec(), vec![], b"xyz".to_vec()];
        let bytes = bytes_codec().encode(&items);

        let mut expected = vec![0, 0, 0, 3];
        expected.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 3]);
        expected.extend_from_slice(b"abxyz");

        assert_eq!(bytes, expected);
        assert_eq!(bytes_codec().decode(&bytes), Ok(items));
    }

    #[test]
    fn empty_list_is_four_zero_bytes() {
        let bytes = bytes_codec().encode(&[]);
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        assert_eq!(bytes_codec().decode(&bytes), Ok(vec![]));
    }

    #[test]
    fn short_buffers_are_corrupted() {
        for len in 0..BYTES_PER_LENGTH_PREFIX {
            assert_eq!(
                bytes_codec().decode(&vec![0; len]),
                Err(Corruption::BufferTooShort { len }.into())
            );
        }
    }

    #[test]
    fn count_limit_checked_before_length_table() {
        let codec = ListCodec::with_max_list_length(NativeCodec::<Vec<u8>>::new(), 2);

        // Declares 3 elements but carries no length table at all.
        assert_eq!(
            codec.decode(&[0, 0, 0, 3]),
            Err(DecodeError::TooManyElements { count: 3, max: 2 })
        );

        // A huge count is rejected without reading past the header.
        assert_eq!(
            codec.decode(&[0x7f, 0xff, 0xff, 0xff]),
            Err(DecodeError::TooManyElements {
                count: MAX_LENGTH_VALUE,
                max: 2
            })
        );
    }

    #[test]
    fn unlimited_codec_reports_truncated_table() {
        assert_eq!(
            bytes_codec().decode(&[0x7f, 0xff, 0xff, 0xff, 0, 0, 0, 0]),
            Err(Corruption::LengthTableTruncated {
                count: MAX_LENGTH_VALUE,
                len: 8
            }
            .into())
        );
    }

    #[test]
    fn count_above_i32_max_is_corrupted() {
        assert_eq!(
            bytes_codec().decode(&[0xff, 0xff, 0xff, 0xff]),
            Err(Corruption::LengthOutOfRange {
                offset: 0,
                value: u32::MAX
            }
            .into())
        );
    }

    #[test]
    fn element_length_above_i32_max_is_corrupted() {
        let bytes = [0, 0, 0, 1, 0x80, 0, 0, 0];
        assert_eq!(
            bytes_codec().decode(&bytes),
            Err(Corruption::LengthOutOfRange {
                offset: 4,
                value: 0x8000_0000
            }
            .into())
        );
    }

    #[test]
    fn trailing_and_missing_bytes() {
        let mut bytes = bytes_codec().encode(&[b"abc".to_vec()]);

        bytes.push(0);
        assert_eq!(
            bytes_codec().decode(&bytes),
            Err(Corruption::LengthMismatch {
                expected: 11,
                actual: 12
            }
            .into())
        );

        bytes.truncate(10);
        assert_eq!(
            bytes_codec().decode(&bytes),
            Err(Corruption::LengthMismatch {
                expected: 11,
                actual: 10
            }
            .into())
        );
    }

    #[test]
    fn failing_element_reports_index() {
        let codec = ListCodec::new(NativeCodec::<u32>::new());
        let mut bytes = codec.encode(&[1, 2]);

        // Shrink the second element to 3 bytes, keeping the table consistent.
        bytes[11] = 3;
        bytes.pop();

        assert_eq!(
            codec.decode(&bytes),
            Err(Corruption::InvalidElement {
                index: 1,
                error: Box::new(DecodeError::InvalidLength {
                    got: 3,
                    expected: 4
                }),
            }
            .into())
        );
    }

    #[test]
    fn decode_count_reads_header_only() {
        let codec = ListCodec::with_max_list_length(NativeCodec::<Vec<u8>>::new(), 4);
        assert_eq!(codec.decode_count(&[0, 0, 0, 4]), Ok(4));
        assert_eq!(
            codec.decode_count(&[0, 0, 0, 5]),
            Err(DecodeError::TooManyElements { count: 5, max: 4 })
        );
        assert_eq!(codec.max_list_length(), Some(4));
        assert_eq!(bytes_codec().max_list_length(), None);
    }

    #[test]
    fn try_encode_matches_encode() {
        let items = vec![vec![1, 2], vec![3]];
        assert_eq!(
            bytes_codec().try_encode(&items),
            Ok(bytes_codec().encode(&items))
        );
    }

    #[test]
    fn decode_failures_are_counted() {
        let before =
            metrics::get_int_counter_vec_value(&metrics::LIST_DECODE_FAILURES_TOTAL, &["corrupted"])
                .unwrap_or(0);

        let _ = bytes_codec().decode(&[0]);

        let after =
            metrics::get_int_counter_vec_value(&metrics::LIST_DECODE_FAILURES_TOTAL, &["corrupted"])
                .unwrap_or(0);
        assert!(after > before);
    }
}
