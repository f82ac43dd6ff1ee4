use chrono::DateTime;
use chrono::Utc;
use fake::faker::name::en::FirstName;
use fake::faker::name::en::LastName;
use fake::Fake;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::store::new_id;
use crate::time;
use crate::time::random_timestamp;

pub const CUSTOMER_COLUMNS: [&str; 6] = [
    "customer_id",
    "first_name",
    "last_name",
    "email",
    "created_at",
    "updated_at",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub customer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(serialize_with = "time::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "time::serialize")]
    pub updated_at: DateTime<Utc>,
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// `first.last<NN>@example.com` with lower-cased names and a two digit suffix.
pub fn email<R: Rng + ?Sized>(rng: &mut R, first_name: &str, last_name: &str) -> String {
    format!(
        "{}.{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.gen_range(10..=99)
    )
}

pub fn generate_customers<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Customer> {
    let mut customers = Vec::with_capacity(count);
    for _ in 0..count {
        let created_at = random_timestamp(rng, from, to);
        let first_name = first_name(rng);
        let last_name = last_name(rng);
        let email = email(rng, &first_name, &last_name);

        customers.push(Customer {
            customer_id: new_id(rng),
            first_name,
            last_name,
            email,
            created_at,
            updated_at: created_at,
        });
    }

    customers
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::Duration;
    use chrono::TimeZone;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_generate_customers() {
        let mut rng = StdRng::seed_from_u64(7);
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = from + Duration::days(30);

        let customers = generate_customers(&mut rng, 200, from, to);
        assert_eq!(customers.len(), 200);

        let ids = customers
            .iter()
            .map(|c| c.customer_id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 200);

        for c in customers.iter() {
            assert_eq!(c.created_at, c.updated_at);
            assert!(c.created_at >= from && c.created_at < to);
            assert!(!c.first_name.is_empty());
            assert!(!c.last_name.is_empty());
            let prefix = format!(
                "{}.{}",
                c.first_name.to_lowercase(),
                c.last_name.to_lowercase()
            );
            assert!(c.email.starts_with(&prefix), "{}", c.email);
            assert!(c.email.ends_with("@example.com"));
        }
    }

    #[test]
    fn test_email_suffix() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let email = email(&mut rng, "Jane", "Doe");
            let suffix: u32 = email
                .trim_start_matches("jane.doe")
                .trim_end_matches("@example.com")
                .parse()
                .unwrap();
            assert!((10..=99).contains(&suffix));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = from + Duration::days(1);

        let a = generate_customers(&mut StdRng::seed_from_u64(3), 10, from, to);
        let b = generate_customers(&mut StdRng::seed_from_u64(3), 10, from, to);
        assert_eq!(a, b);
    }
}
