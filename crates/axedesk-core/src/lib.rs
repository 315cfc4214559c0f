//! # Axedesk Core
//!
//! Core domain types and pure classification functions for the Axedesk
//! credit-axe toolkit.
//!
//! This crate provides the leaf building blocks used by the data pipeline:
//!
//! - **Rating classification**: [`RatingCategory`] maps agency rating strings
//!   to a fixed set of credit-quality categories
//! - **Tenor bucketing**: [`TenorBucket`] maps a maturity date to a named
//!   tenor bucket relative to an as-of date
//! - **Sector taxonomy**: [`derive_sector`] splits a raw sector string into
//!   a top-level sector and a sub-sector
//!
//! All functions here are pure and total: any input, including garbage,
//! produces a well-defined result rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use axedesk_core::prelude::*;
//!
//! let cat = RatingCategory::classify(Some("BBB-"), None);
//! assert_eq!(cat, RatingCategory::Crossover);
//!
//! let class = derive_sector("IG CoCo Banks");
//! assert_eq!(class.sector, "IG FIN");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod rating;
pub mod sector;
pub mod tenor;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::rating::RatingCategory;
    pub use crate::sector::{derive_sector, SectorClass};
    pub use crate::tenor::TenorBucket;
}

// Re-export commonly used types at crate root
pub use rating::RatingCategory;
pub use sector::{derive_sector, SectorClass};
pub use tenor::TenorBucket;
