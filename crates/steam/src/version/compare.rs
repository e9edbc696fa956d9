#![forbid(unsafe_code)]

use std::cmp::Ordering;

/// Compare two arbitrary dot-separated version strings.
///
/// Segments are compared pairwise, a missing segment counts as an empty
/// string. Two numeric segments compare as numbers, a numeric segment sorts
/// above a textual one, and two textual segments compare byte-wise. Any
/// string is accepted.
///
/// ```
/// # use steam::version::compare_versions;
/// # use std::cmp::Ordering;
/// assert_eq!(compare_versions("1.2", "1.10"), Ordering::Less);
/// assert_eq!(compare_versions("1.2.0", "1.2"), Ordering::Greater);
/// assert_eq!(compare_versions("1.0.0-alpha", "1.0.0"), Ordering::Less);
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        let (l, r) = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (l, r) => (l.unwrap_or_default(), r.unwrap_or_default()),
        };

        let ordering = compare_segment(l, r);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn compare_segment(l: &str, r: &str) -> Ordering {
    match (l.parse::<i64>(), r.parse::<i64>()) {
        (Ok(l), Ok(r)) => l.cmp(&r),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
        (Err(_), Err(_)) => l.cmp(r),
    }
}
