pub mod display;
pub mod link;
pub mod planner;
pub mod pricing;
pub mod rates;

pub use crate::domain::model::{ContactSubmission, Duration, Quote, Selection, Service};
pub use crate::domain::ports::{ContactSink, VisitCounter};
pub use crate::utils::error::Result;
