//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the InsightTrack data engine.
//! CONTEXT: Re-exports the order model, generator and dataset for use by the
//! report engine, persistence and the application.

pub mod dataset;
pub mod derived;
pub mod error;
pub mod generator;
pub mod number_format;
pub mod order;

// Re-export commonly used types at the crate root
pub use dataset::Dataset;
pub use derived::{derive_orders, round2};
pub use error::EngineError;
pub use generator::{
    generate_dataset, generate_raw_orders, generate_seeded, seed_from_phrase, GeneratorConfig,
    RandomSource, SeededSource,
};
pub use number_format::{format_number, NumberFormat};
pub use order::{Category, Order, OrderId, RawOrder, Region, ORDER_COLUMNS};
