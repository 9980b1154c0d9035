use crate::core::link::lock_in_href;
use crate::core::pricing::PricingEngine;
use crate::domain::model::{Duration, Quote, Selection, Service};
use crate::utils::error::{Result, SiteError};

/// Selection state behind the plan builder.
///
/// Owns the UI policy the engine stays out of: gym access cannot be
/// removed while it is the only service selected.
#[derive(Debug, Clone)]
pub struct Planner {
    engine: PricingEngine,
    selection: Selection,
    duration: Duration,
    contact_anchor: String,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PricingEngine::standard())
    }
}

impl Planner {
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            engine,
            selection: Selection::of(&[Service::Gym]),
            duration: Duration::OneMonth,
            contact_anchor: crate::core::link::DEFAULT_CONTACT_ANCHOR.to_string(),
        }
    }

    pub fn with_contact_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.contact_anchor = anchor.into();
        self
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Flip one service on or off.
    pub fn toggle(&mut self, service: Service) -> Result<Selection> {
        let currently = self.selection.is_selected(service);
        let proposed = self.selection.with(service, !currently);

        if service == Service::Gym && currently && proposed.count() == 0 {
            tracing::debug!("Rejected removing gym access from a gym-only plan");
            return Err(SiteError::SelectionRejected {
                reason: "gym access is the only selected service".to_string(),
            });
        }

        tracing::trace!(service = %service, selected = !currently, "Service toggled");
        self.selection = proposed;
        Ok(self.selection)
    }

    /// Replace the whole selection, applying the same gym rule as `toggle`.
    pub fn select(&mut self, selection: Selection) -> Result<Selection> {
        if selection.count() == 0 && self.selection == Selection::of(&[Service::Gym]) {
            return Err(SiteError::SelectionRejected {
                reason: "gym access is the only selected service".to_string(),
            });
        }
        self.selection = selection;
        Ok(self.selection)
    }

    pub fn set_duration(&mut self, duration: Duration) {
        tracing::trace!(months = duration.months(), "Duration selected");
        self.duration = duration;
    }

    pub fn quote(&self) -> Quote {
        self.engine.quote(&self.selection, self.duration)
    }

    /// Deep link into the contact form for the current plan.
    pub fn lock_in_link(&self) -> String {
        lock_in_href(&self.contact_anchor, &self.selection, self.duration, &self.quote())
    }
}
