use crate::domain::model::ContactSubmission;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound channel for contact-form submissions (email/notification intake).
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Page-visit counter. Implementations must apply `increment` atomically at
/// their storage boundary.
#[async_trait]
pub trait VisitCounter: Send + Sync {
    async fn increment(&self) -> Result<u64>;
    async fn current(&self) -> Result<u64>;
}
