use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::seq::index;
use rand::Rng;

use crate::error::EcommGenError;
use crate::error::Result;
use crate::store::customers;
use crate::store::customers::Customer;
use crate::time::random_timestamp;

/// Field touched by a single update event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    LastName,
    Email,
}

/// Number of customers picked for updates out of `population`.
pub fn sample_size(rate: f64, population: usize) -> usize {
    ((rate * population as f64).round() as usize).min(population)
}

/// Applies update events to a random `rate` share of `customers` in place and
/// returns a copy of every updated record. `updated_at` of an updated record
/// lies in `[from, to)` when possible and is always after its `created_at`.
pub fn simulate_updates<R: Rng + ?Sized>(
    rng: &mut R,
    customers: &mut [Customer],
    rate: f64,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<Customer>> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(EcommGenError::InvalidUpdateRate(rate));
    }

    let amount = sample_size(rate, customers.len());
    let mut updated = Vec::with_capacity(amount);
    for idx in index::sample(rng, customers.len(), amount) {
        let customer = &mut customers[idx];
        let change = if rng.gen_bool(0.5) {
            Change::LastName
        } else {
            Change::Email
        };
        update_customer(rng, customer, change, from, to);
        updated.push(customer.clone());
    }

    Ok(updated)
}

pub fn update_customer<R: Rng + ?Sized>(
    rng: &mut R,
    customer: &mut Customer,
    change: Change,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) {
    match change {
        Change::LastName => {
            let mut last_name = customers::last_name(rng);
            while last_name == customer.last_name {
                last_name = customers::last_name(rng);
            }
            customer.last_name = last_name;
        }
        Change::Email => {
            let mut email = customers::email(rng, &customer.first_name, &customer.last_name);
            while email == customer.email {
                email = customers::email(rng, &customer.first_name, &customer.last_name);
            }
            customer.email = email;
        }
    }

    let earliest = from.max(customer.updated_at + Duration::seconds(1));
    customer.updated_at = random_timestamp(rng, earliest, to);
}
