use rand::Rng;
use uuid::Uuid;

pub mod catalog;
pub mod customers;
pub mod orders;
pub mod products;
pub mod scenario;
pub mod updates;

/// Random v4 identifier drawn from `rng`, so seeded runs produce the same ids.
pub fn new_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
