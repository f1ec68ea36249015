//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  chicago.csv / new_york_city.csv / washington.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV → TripTable (+ derived calendar fields)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │  TripTable    │  Vec<TripRecord>, per-city schema flags
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  apply month/day criteria → filtered TripTable
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
