//! Boxtally Catalog Model
//!
//! Defines the core data contracts for Boxtally catalogs:
//! - **Movies:** A single film release with its studio and worldwide gross
//! - **Directors:** A director paired with their ordered filmography
//! - **Catalogs:** Top-level metadata plus the full director dataset
//!
//! Monetary amounts are whole currency units (`u64`), so gross figures are
//! non-negative by construction and sums never see fractional cents.

pub mod catalog;
pub mod director;
pub mod movie;

pub use catalog::*;
pub use director::*;
pub use movie::*;
