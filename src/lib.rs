pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::contact::HttpContactSink;
pub use adapters::visits::{HttpVisitCounter, InMemoryVisitCounter};
pub use core::planner::Planner;
pub use core::pricing::{quote, BundleRules, PricingEngine};
pub use core::rates::{RateTable, STANDARD_RATES};
pub use domain::model::{ContactSubmission, Duration, Quote, Selection, Service};
pub use domain::ports::{ContactSink, VisitCounter};
pub use utils::error::{Result, SiteError};
