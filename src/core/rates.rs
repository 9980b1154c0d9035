use crate::domain::model::{Duration, Service};

/// Base price per (service, duration), in whole rupees.
///
/// Rows follow `Service::ALL`, columns follow `Duration::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    rows: [[u32; 4]; 3],
}

pub const STANDARD_RATES: RateTable = RateTable::new([
    // 1, 3, 6, 12 months
    [2500, 5500, 7500, 12000],
    [2000, 4000, 6000, 8000],
    [1500, 3500, 5000, 8000],
]);

impl RateTable {
    pub const fn new(rows: [[u32; 4]; 3]) -> Self {
        Self { rows }
    }

    pub fn base_price(&self, service: Service, duration: Duration) -> u32 {
        self.rows[service.index()][duration.index()]
    }
}

impl Default for RateTable {
    fn default() -> Self {
        STANDARD_RATES
    }
}
