use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use strum_macros::Display;
use tracing::debug;
use tracing::info;

use crate::error::EcommGenError;
use crate::error::Result;
use crate::output::file_name;
use crate::output::write_csv;
use crate::output::Entity;
use crate::output::BACKFILL_SUFFIX;
use crate::store::customers::generate_customers;
use crate::store::customers::Customer;
use crate::store::customers::CUSTOMER_COLUMNS;
use crate::store::orders::generate_orders;
use crate::store::orders::Order;
use crate::store::orders::OrderItem;
use crate::store::orders::ORDER_COLUMNS;
use crate::store::orders::ORDER_ITEM_COLUMNS;
use crate::store::products::generate_products;
use crate::store::products::Product;
use crate::store::products::PRODUCT_COLUMNS;
use crate::store::updates::simulate_updates;
use crate::time::FILE_DATETIME_FORMAT;
use crate::time::FILE_DATE_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Backfill followed by the incremental steps.
    All,
    Backfill,
    /// Incremental steps only, seeded by a backfill population that is never
    /// written.
    Incremental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
}

pub struct Config<R> {
    pub rng: R,
    pub mode: Mode,
    pub out_path: PathBuf,
    pub now: DateTime<Utc>,
    pub backfill_period: Duration,
    pub incremental_period: Duration,
    pub step: Duration,
    pub backfill: Counts,
    /// Per step.
    pub incremental: Counts,
    pub update_rate: f64,
}

/// Time window of one incremental step, `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Step {
    /// Start date of the step, with the time of day appended when steps are
    /// shorter than a day so that every step gets its own files.
    pub fn suffix(&self) -> String {
        let format = if self.to - self.from < Duration::days(1) {
            FILE_DATETIME_FORMAT
        } else {
            FILE_DATE_FORMAT
        };
        self.from.format(format).to_string()
    }
}

/// Everything created so far, the pool new orders and updates draw from.
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
}

/// Records that go into one set of output files.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// New customers followed by update records of existing ones.
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
}

impl Batch {
    pub fn write(&self, dir: &Path, suffix: &str, summary: &mut Summary) -> Result<()> {
        let files = [
            write_entity(dir, suffix, Entity::Customers, &CUSTOMER_COLUMNS, &self.customers)?,
            write_entity(dir, suffix, Entity::Products, &PRODUCT_COLUMNS, &self.products)?,
            write_entity(dir, suffix, Entity::Orders, &ORDER_COLUMNS, &self.orders)?,
            write_entity(
                dir,
                suffix,
                Entity::OrderItems,
                &ORDER_ITEM_COLUMNS,
                &self.order_items,
            )?,
        ];
        summary.files.extend(files);

        Ok(())
    }
}

fn write_entity<T: Serialize>(
    dir: &Path,
    suffix: &str,
    entity: Entity,
    columns: &[&str],
    records: &[T],
) -> Result<FileSummary> {
    let name = file_name(entity, suffix);
    write_csv(&dir.join(&name), columns, records)?;
    debug!("{name}: {} row(s)", records.len());

    Ok(FileSummary {
        name,
        rows: records.len(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub files: Vec<FileSummary>,
}

impl Summary {
    pub fn rows(&self, name: &str) -> Option<usize> {
        self.files.iter().find(|f| f.name == name).map(|f| f.rows)
    }
}

pub struct Scenario<R> {
    pub rng: R,
    pub mode: Mode,
    pub out_path: PathBuf,
    pub now: DateTime<Utc>,
    pub backfill_period: Duration,
    pub incremental_period: Duration,
    pub step: Duration,
    pub backfill: Counts,
    pub incremental: Counts,
    pub update_rate: f64,
}

impl<R: Rng> Scenario<R> {
    pub fn new(cfg: Config<R>) -> Self {
        Self {
            rng: cfg.rng,
            mode: cfg.mode,
            out_path: cfg.out_path,
            now: cfg.now,
            backfill_period: cfg.backfill_period,
            incremental_period: cfg.incremental_period,
            step: cfg.step,
            backfill: cfg.backfill,
            incremental: cfg.incremental,
            update_rate: cfg.update_rate,
        }
    }

    /// `[now - (incremental + backfill), now - incremental]`
    pub fn backfill_window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let to = self
            .now
            .checked_sub_signed(self.incremental_period)
            .ok_or_else(|| {
                EcommGenError::Internal(format!(
                    "incremental period {} is out of range",
                    self.incremental_period
                ))
            })?;
        let from = to.checked_sub_signed(self.backfill_period).ok_or_else(|| {
            EcommGenError::Internal(format!(
                "backfill period {} is out of range",
                self.backfill_period
            ))
        })?;

        Ok((from, to))
    }

    /// Consecutive windows of `step` length starting at the end of the backfill.
    /// A trailing remainder shorter than `step` is not covered.
    pub fn steps(&self) -> Result<Vec<Step>> {
        if self.step <= Duration::zero() {
            return Err(EcommGenError::Internal(format!(
                "step must be positive, got {}",
                self.step
            )));
        }

        let (_, mut from) = self.backfill_window()?;
        let mut steps = Vec::new();
        while let Some(to) = from.checked_add_signed(self.step) {
            if to > self.now {
                break;
            }
            steps.push(Step { from, to });
            from = to;
        }

        Ok(steps)
    }

    pub fn run(&mut self) -> Result<Summary> {
        if !self.out_path.try_exists()? {
            return Err(EcommGenError::FileNotFound(format!(
                "out path {:?} doesn't exist",
                self.out_path
            )));
        }
        if !(0.0..=1.0).contains(&self.update_rate) {
            return Err(EcommGenError::InvalidUpdateRate(self.update_rate));
        }
        let steps = self.steps()?;

        let mut summary = Summary::default();
        info!("mode: {}", self.mode);
        match self.mode {
            Mode::All => {
                let mut population = self.run_backfill(&mut summary)?;
                self.run_incremental(&mut population, &steps, &mut summary)?;
            }
            Mode::Backfill => {
                self.run_backfill(&mut summary)?;
            }
            Mode::Incremental => {
                let mut population = self.seed_population()?;
                self.run_incremental(&mut population, &steps, &mut summary)?;
            }
        }

        Ok(summary)
    }

    pub fn generate_backfill(&mut self) -> Result<Batch> {
        let (from, to) = self.backfill_window()?;
        debug!("backfill window: {from} - {to}");

        let customers = generate_customers(&mut self.rng, self.backfill.customers, from, to);
        let products = generate_products(&mut self.rng, self.backfill.products, from, to);
        let (orders, order_items) = generate_orders(
            &mut self.rng,
            self.backfill.orders,
            &customers,
            &products,
            from,
            to,
        )?;

        Ok(Batch {
            customers,
            products,
            orders,
            order_items,
        })
    }

    /// Builds the in-memory pools used when only the incremental phase runs.
    pub fn seed_population(&mut self) -> Result<Population> {
        info!("seeding customers and products in memory...");
        let (from, to) = self.backfill_window()?;
        let population = Population {
            customers: generate_customers(&mut self.rng, self.backfill.customers, from, to),
            products: generate_products(&mut self.rng, self.backfill.products, from, to),
        };

        if population.customers.is_empty() {
            return Err(EcommGenError::EmptyCustomerPool);
        }
        if population.products.is_empty() {
            return Err(EcommGenError::EmptyProductPool);
        }

        Ok(population)
    }

    /// Generates the records of one step and moves its new entities into
    /// `population`.
    pub fn generate_step(&mut self, population: &mut Population, step: &Step) -> Result<Batch> {
        let new_customers =
            generate_customers(&mut self.rng, self.incremental.customers, step.from, step.to);
        let new_products =
            generate_products(&mut self.rng, self.incremental.products, step.from, step.to);

        let updates = simulate_updates(
            &mut self.rng,
            &mut population.customers,
            self.update_rate,
            step.from,
            step.to,
        )?;

        population.customers.extend(new_customers.iter().cloned());
        population.products.extend(new_products.iter().cloned());

        let (orders, order_items) = generate_orders(
            &mut self.rng,
            self.incremental.orders,
            &population.customers,
            &population.products,
            step.from,
            step.to,
        )?;

        debug!(
            "step {}: {} new customer(s), {} update(s), {} new product(s), {} order(s)",
            step.suffix(),
            new_customers.len(),
            updates.len(),
            new_products.len(),
            orders.len()
        );

        let mut customers = new_customers;
        customers.extend(updates);

        Ok(Batch {
            customers,
            products: new_products,
            orders,
            order_items,
        })
    }

    fn run_backfill(&mut self, summary: &mut Summary) -> Result<Population> {
        info!("generating backfill data...");
        let batch = self.generate_backfill()?;
        batch.write(&self.out_path, BACKFILL_SUFFIX, summary)?;
        info!("backfill data generation complete");

        Ok(Population {
            customers: batch.customers,
            products: batch.products,
        })
    }

    fn run_incremental(
        &mut self,
        population: &mut Population,
        steps: &[Step],
        summary: &mut Summary,
    ) -> Result<()> {
        info!("generating incremental data for {} step(s)...", steps.len());
        for step in steps {
            let batch = self.generate_step(population, step)?;
            batch.write(&self.out_path, &step.suffix(), summary)?;
        }
        info!("incremental data generation complete");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::env::temp_dir;

    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn scenario(mode: Mode) -> Scenario<StdRng> {
        Scenario::new(Config {
            rng: StdRng::seed_from_u64(1),
            mode,
            out_path: temp_dir(),
            now: Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap(),
            backfill_period: Duration::days(365),
            incremental_period: Duration::days(7),
            step: Duration::days(1),
            backfill: Counts {
                customers: 10,
                products: 5,
                orders: 20,
            },
            incremental: Counts {
                customers: 1,
                products: 1,
                orders: 4,
            },
            update_rate: 0.1,
        })
    }

    #[test]
    fn test_windows() -> Result<()> {
        let s = scenario(Mode::All);
        let (from, to) = s.backfill_window()?;
        assert_eq!(to, Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap());
        assert_eq!(from, to - Duration::days(365));

        let steps = s.steps()?;
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[0].from, to);
        assert_eq!(steps[0].suffix(), "20240603");
        assert_eq!(steps[6].to, s.now);
        for pair in steps.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }

        Ok(())
    }

    #[test]
    fn test_partial_step_is_dropped() -> Result<()> {
        let mut s = scenario(Mode::All);
        s.step = Duration::days(2);
        assert_eq!(s.steps()?.len(), 3);

        s.step = Duration::zero();
        assert!(s.steps().is_err());

        s.step = Duration::days(365 * 300_000);
        assert!(s.steps()?.is_empty());

        Ok(())
    }

    #[test]
    fn test_sub_day_steps_have_distinct_suffixes() -> Result<()> {
        let mut s = scenario(Mode::All);
        s.step = Duration::hours(12);

        let steps = s.steps()?;
        assert_eq!(steps.len(), 14);
        assert_eq!(steps[0].suffix(), "20240603120000");
        assert_eq!(steps[1].suffix(), "20240604000000");
        let suffixes = steps.iter().map(|s| s.suffix()).collect::<HashSet<_>>();
        assert_eq!(suffixes.len(), steps.len());

        s.step = Duration::hours(36);
        assert_eq!(s.steps()?[1].suffix(), "20240605");

        Ok(())
    }

    #[test]
    fn test_periods_out_of_range() {
        let mut s = scenario(Mode::All);
        s.backfill_period = Duration::days(365 * 300_000);
        assert!(matches!(
            s.backfill_window(),
            Err(EcommGenError::Internal(_))
        ));
        assert!(matches!(s.steps(), Err(EcommGenError::Internal(_))));
        assert!(matches!(
            s.generate_backfill(),
            Err(EcommGenError::Internal(_))
        ));

        let mut s = scenario(Mode::Incremental);
        s.incremental_period = Duration::days(365 * 300_000);
        assert!(matches!(s.run(), Err(EcommGenError::Internal(_))));
    }

    #[test]
    fn test_seed_population_requires_pools() {
        let mut s = scenario(Mode::Incremental);
        s.backfill.customers = 0;
        assert!(matches!(
            s.seed_population(),
            Err(EcommGenError::EmptyCustomerPool)
        ));

        let mut s = scenario(Mode::Incremental);
        s.backfill.products = 0;
        assert!(matches!(
            s.seed_population(),
            Err(EcommGenError::EmptyProductPool)
        ));
    }

    #[test]
    fn test_generate_step_extends_population() -> Result<()> {
        let mut s = scenario(Mode::All);
        let batch = s.generate_backfill()?;
        let mut population = Population {
            customers: batch.customers,
            products: batch.products,
        };
        let step = s.steps()?[0];

        let batch = s.generate_step(&mut population, &step)?;
        assert_eq!(population.customers.len(), 11);
        assert_eq!(population.products.len(), 6);
        // one new customer plus round(0.1 * 10) updates
        assert_eq!(batch.customers.len(), 2);
        assert_eq!(batch.products.len(), 1);
        assert_eq!(batch.orders.len(), 4);

        Ok(())
    }
}
