pub use metrics::*;
use std::sync::LazyLock;

pub static LIST_ENCODE_TOTAL: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
    try_create_int_counter(
        "list_codec_encode_total",
        "Count of lists encoded",
    )
});
pub static LIST_ENCODE_ELEMENTS_TOTAL: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
    try_create_int_counter(
        "list_codec_encode_elements_total",
        "Count of elements written into encoded lists",
    )
});
pub static LIST_DECODE_TOTAL: LazyLock<Result<IntCounter>> = LazyLock::new(|| {
    try_create_int_counter(
        "list_codec_decode_total",
        "Count of decode attempts, successful or not",
    )
});
pub static LIST_DECODE_FAILURES_TOTAL: LazyLock<Result<IntCounterVec>> = LazyLock::new(|| {
    try_create_int_counter_vec(
        "list_codec_decode_failures_total",
        "Count of rejected encoded lists, by error kind",
        &["kind"],
    )
});
pub static LIST_DECODE_TIMES: LazyLock<Result<Histogram>> = LazyLock::new(|| {
    try_create_histogram(
        "list_codec_decode_seconds",
        "Time taken to decode an encoded list",
    )
});
