#![forbid(unsafe_code)]

/// Identifiers per request. Longer query strings are answered with
/// 414 URI Too Long.
pub const DEFAULT_CHUNK_MAX: usize = 220;

/// Split `ids` into consecutive chunks of at most `max` identifiers.
///
/// Order is preserved and only the last chunk may be shorter. An empty input
/// or a zero `max` plans nothing.
pub fn plan_chunks(ids: &[u64], max: usize) -> Vec<&[u64]> {
    if max == 0 {
        return Vec::new();
    }
    ids.chunks(max).collect()
}
