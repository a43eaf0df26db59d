//! FILENAME: core/engine/src/generator.rs
//! PURPOSE: Deterministic synthetic order generator.
//! CONTEXT: Field columns are drawn one at a time (all regions, then all
//! categories, quantities and unit prices), followed by the profit jitters
//! drawn in `derived`. Dates and order IDs are sequential and use no randomness.

use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::derived::{derive_orders, round2};
use crate::error::EngineError;
use crate::order::{Category, OrderId, RawOrder, Region};

// ============================================================================
// RANDOM SOURCE
// ============================================================================

/// Source of the random draws used during generation.
/// Implemented by `SeededSource`; tests substitute scripted sources.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform float in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// ChaCha-backed random source seeded from a phrase.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(seed_from_phrase(phrase))
    }
}

impl RandomSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Derives a numeric seed from a phrase.
///
/// FNV-1a (64-bit) reduced modulo 10 000, so the value is stable across
/// processes and platforms.
pub fn seed_from_phrase(phrase: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let hash = phrase.bytes().fold(FNV_OFFSET, |acc, b| {
        (acc ^ b as u64).wrapping_mul(FNV_PRIME)
    });
    hash % 10_000
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Parameters of the synthetic dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Phrase the RNG seed is derived from.
    pub seed_phrase: String,
    pub order_count: usize,
    pub first_order_id: OrderId,
    pub start_date: NaiveDate,
    /// Days between consecutive orders.
    pub cadence_days: u32,
    pub unit_price_min: f64,
    pub unit_price_max: f64,
    pub quantity_min: u32,
    pub quantity_max: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed_phrase: "Mayuri2025".to_string(),
            order_count: 120,
            first_order_id: 3001,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            cadence_days: 7,
            unit_price_min: 50.0,
            unit_price_max: 1000.0,
            quantity_min: 1,
            quantity_max: 5,
        }
    }
}

impl GeneratorConfig {
    /// Checks the parameters. Any failure here is fatal for startup.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.order_count == 0 {
            return Err(EngineError::InvalidConfig(
                "order_count must be at least 1".to_string(),
            ));
        }
        if self.cadence_days == 0 {
            return Err(EngineError::InvalidConfig(
                "cadence_days must be at least 1".to_string(),
            ));
        }
        if !self.unit_price_min.is_finite()
            || !self.unit_price_max.is_finite()
            || self.unit_price_min <= 0.0
            || self.unit_price_min > self.unit_price_max
        {
            return Err(EngineError::InvalidConfig(format!(
                "unit price range [{}, {}] is not a positive interval",
                self.unit_price_min, self.unit_price_max
            )));
        }
        if self.quantity_min == 0 || self.quantity_min > self.quantity_max {
            return Err(EngineError::InvalidConfig(format!(
                "quantity range [{}, {}] is not a positive interval",
                self.quantity_min, self.quantity_max
            )));
        }

        let last_id = (self.order_count as u64 - 1).checked_add(u64::from(self.first_order_id));
        if !matches!(last_id, Some(id) if id <= u64::from(OrderId::MAX)) {
            return Err(EngineError::InvalidConfig(
                "order ids overflow".to_string(),
            ));
        }
        let last_offset = (self.order_count as u64 - 1).checked_mul(u64::from(self.cadence_days));
        if !matches!(last_offset, Some(days) if days <= u64::from(u32::MAX))
            || self.date_at(self.order_count - 1).is_none()
        {
            return Err(EngineError::InvalidConfig(
                "order dates overflow the calendar".to_string(),
            ));
        }

        Ok(())
    }

    /// Date of the `index`-th order.
    fn date_at(&self, index: usize) -> Option<NaiveDate> {
        let days = (index as i64).checked_mul(self.cadence_days as i64)?;
        self.start_date.checked_add_signed(Duration::try_days(days)?)
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// Draws the raw order rows described by `config`.
pub fn generate_raw_orders<R>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<RawOrder>, EngineError>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;
    let n = config.order_count;

    let regions: Vec<Region> = (0..n)
        .map(|_| Region::ALL[rng.pick(Region::ALL.len())])
        .collect();
    let categories: Vec<Category> = (0..n)
        .map(|_| Category::ALL[rng.pick(Category::ALL.len())])
        .collect();
    let quantities: Vec<u32> = (0..n)
        .map(|_| rng.int_inclusive(config.quantity_min, config.quantity_max))
        .collect();
    let unit_prices: Vec<f64> = (0..n)
        .map(|_| round2(rng.uniform(config.unit_price_min, config.unit_price_max)))
        .collect();

    let mut orders = Vec::with_capacity(n);
    for i in 0..n {
        let date = config.date_at(i).ok_or_else(|| {
            EngineError::InvalidConfig("order dates overflow the calendar".to_string())
        })?;
        orders.push(RawOrder {
            order_id: config.first_order_id + i as OrderId,
            date,
            region: regions[i],
            category: categories[i],
            quantity: quantities[i],
            unit_price: unit_prices[i],
        });
    }

    Ok(orders)
}

/// Generates raw orders, derives their computed fields, and freezes the result.
pub fn generate_dataset<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Dataset, EngineError>
where
    R: RandomSource + ?Sized,
{
    let raws = generate_raw_orders(config, rng)?;
    let orders = derive_orders(raws, rng);
    Ok(Dataset::new(orders))
}

/// Generates the dataset for `config` using the source seeded by its phrase.
pub fn generate_seeded(config: &GeneratorConfig) -> Result<Dataset, EngineError> {
    let mut rng = SeededSource::from_phrase(&config.seed_phrase);
    generate_dataset(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through scripted draws; uniform draws return the lower bound
    /// plus a scripted offset.
    struct ScriptedSource {
        picks: Vec<usize>,
        ints: Vec<u32>,
        floats: Vec<f64>,
        cursor: (usize, usize, usize),
    }

    impl ScriptedSource {
        fn new(picks: Vec<usize>, ints: Vec<u32>, floats: Vec<f64>) -> Self {
            ScriptedSource { picks, ints, floats, cursor: (0, 0, 0) }
        }
    }

    impl RandomSource for ScriptedSource {
        fn pick(&mut self, len: usize) -> usize {
            let v = self.picks[self.cursor.0 % self.picks.len()];
            self.cursor.0 += 1;
            v % len
        }

        fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
            let v = self.ints[self.cursor.1 % self.ints.len()];
            self.cursor.1 += 1;
            v.clamp(low, high)
        }

        fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
            let v = self.floats[self.cursor.2 % self.floats.len()];
            self.cursor.2 += 1;
            v
        }
    }

    fn small_config(order_count: usize) -> GeneratorConfig {
        GeneratorConfig {
            order_count,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_seed_from_phrase_is_stable() {
        assert_eq!(seed_from_phrase("Mayuri2025"), seed_from_phrase("Mayuri2025"));
        assert!(seed_from_phrase("Mayuri2025") < 10_000);
        assert_ne!(seed_from_phrase("Mayuri2025"), seed_from_phrase("Mayuri2026"));
    }

    #[test]
    fn test_scripted_generation() {
        // Columns are drawn in order: 2 regions, 2 categories, 2 quantities, 2 prices,
        // then 2 jitters.
        let mut rng = ScriptedSource::new(
            vec![0, 3, 1, 2],
            vec![2, 5],
            vec![100.004, 250.0, 1.0, 1.0],
        );

        let dataset = generate_dataset(&small_config(2), &mut rng).unwrap();
        let orders = dataset.orders();

        assert_eq!(orders[0].region, Region::North);
        assert_eq!(orders[1].region, Region::West);
        assert_eq!(orders[0].category, Category::Furniture);
        assert_eq!(orders[1].category, Category::Clothing);
        assert_eq!(orders[0].quantity, 2);
        assert_eq!(orders[1].quantity, 5);
        assert_eq!(orders[0].unit_price, 100.0);
        assert_eq!(orders[1].unit_price, 250.0);
        assert_eq!(orders[0].sales, 200.0);
        assert_eq!(orders[1].sales, 1250.0);
        assert_eq!(orders[0].profit, 40.0);
        assert_eq!(orders[1].profit, 437.5);
    }

    #[test]
    fn test_default_generation_shape() {
        let dataset = generate_seeded(&GeneratorConfig::default()).unwrap();
        let orders = dataset.orders();

        assert_eq!(orders.len(), 120);
        assert_eq!(orders[0].order_id, 3001);
        assert_eq!(orders[119].order_id, 3120);
        assert_eq!(orders[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(orders[1].date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        for pair in orders.windows(2) {
            assert_eq!(pair[1].order_id, pair[0].order_id + 1);
            assert_eq!((pair[1].date - pair[0].date).num_days(), 7);
        }
        for order in orders {
            assert!((1..=5).contains(&order.quantity));
            assert!(order.unit_price >= 50.0 && order.unit_price <= 1000.0);
            assert!(order.sales > 0.0);
            let jitter = order.profit / (order.sales * order.category.margin_rate());
            assert!(jitter > 0.89 && jitter < 1.11, "jitter {} out of range", jitter);
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate_seeded(&GeneratorConfig::default()).unwrap();
        let b = generate_seeded(&GeneratorConfig::default()).unwrap();
        assert_eq!(a.orders(), b.orders());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut rng = SeededSource::new(1);

        let zero = small_config(0);
        assert!(matches!(
            generate_raw_orders(&zero, &mut rng),
            Err(EngineError::InvalidConfig(_))
        ));

        let inverted = GeneratorConfig {
            unit_price_min: 500.0,
            unit_price_max: 100.0,
            ..GeneratorConfig::default()
        };
        assert!(inverted.validate().is_err());

        let no_quantity = GeneratorConfig {
            quantity_min: 0,
            ..GeneratorConfig::default()
        };
        assert!(no_quantity.validate().is_err());

        let id_overflow = GeneratorConfig {
            first_order_id: u32::MAX,
            order_count: 2,
            ..GeneratorConfig::default()
        };
        assert!(id_overflow.validate().is_err());
    }

    #[test]
    fn test_huge_order_count_rejected_without_panic() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"order_count": 4611686018427387904}"#).unwrap();
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        let slow_calendar = GeneratorConfig {
            order_count: 1_000_000,
            first_order_id: 1,
            cadence_days: 1_000_000,
            ..GeneratorConfig::default()
        };
        assert!(matches!(slow_calendar.validate(), Err(EngineError::InvalidConfig(_))));
    }
}
