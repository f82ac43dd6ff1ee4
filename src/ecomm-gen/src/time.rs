use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::Rng;
use serde::Serializer;

/// ISO-8601 without offset, microsecond precision. All timestamps are UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Date part used in incremental file names.
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// File name suffix of steps shorter than a day, several of which share a date.
pub const FILE_DATETIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Picks a timestamp uniformly from `[from, to)` with microsecond resolution.
/// An empty or inverted window yields `from`.
pub fn random_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = (to - from).num_microseconds().unwrap_or(i64::MAX);
    if span <= 0 {
        return from;
    }

    from + Duration::microseconds(rng.gen_range(0..span))
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(ts))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::time::format_timestamp;
    use crate::time::random_timestamp;

    #[test]
    fn test_random_timestamp_in_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = from + Duration::days(1);

        for _ in 0..1000 {
            let ts = random_timestamp(&mut rng, from, to);
            assert!(ts >= from && ts < to);
        }
    }

    #[test]
    fn test_random_timestamp_empty_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(random_timestamp(&mut rng, from, from), from);
        assert_eq!(
            random_timestamp(&mut rng, from, from - Duration::hours(1)),
            from
        );
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap() + Duration::microseconds(42);
        assert_eq!(format_timestamp(&ts), "2024-03-09T07:05:01.000042");
    }
}
