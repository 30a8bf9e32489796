//! Human-readable order numbers: `ORD-YYYYMMDD-XXXXXX`.

use chrono::{DateTime, Utc};
use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const SUFFIX_LENGTH: usize = 6;

/// Generates an order number for an order placed at `now`.
///
/// The suffix avoids look-alike characters (`0/O`, `1/I`). Uniqueness is enforced
/// by the database; callers retry on conflict.
pub fn generate(now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("ORD-{}-{}", now.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_date_and_suffix() {
        let now = Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap();
        let number = generate(now);

        assert!(number.starts_with("ORD-20250307-"));
        assert_eq!(number.len(), "ORD-20250307-".len() + SUFFIX_LENGTH);
        assert!(number[13..].bytes().all(|b| CHARSET.contains(&b)));
    }
}
