use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_email, validate_min_chars, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A service a member can add to their plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    Gym,
    #[serde(alias = "pt")]
    PersonalTraining,
    Nutrition,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Gym, Service::PersonalTraining, Service::Nutrition];

    pub fn id(&self) -> &'static str {
        match self {
            Service::Gym => "gym",
            Service::PersonalTraining => "personal-training",
            Service::Nutrition => "nutrition",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Service::Gym => "Gym Access",
            Service::PersonalTraining => "Personal Training",
            Service::Nutrition => "Nutrition",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Service::Gym => 0,
            Service::PersonalTraining => 1,
            Service::Nutrition => 2,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Service {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "gym" => Ok(Service::Gym),
            "personal-training" | "pt" => Ok(Service::PersonalTraining),
            "nutrition" => Ok(Service::Nutrition),
            other => Err(SiteError::UnknownService {
                value: other.to_string(),
            }),
        }
    }
}

/// Commitment length. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Duration {
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Duration {
    pub const ALL: [Duration; 4] = [
        Duration::OneMonth,
        Duration::ThreeMonths,
        Duration::SixMonths,
        Duration::TwelveMonths,
    ];

    pub fn months(&self) -> u8 {
        match self {
            Duration::OneMonth => 1,
            Duration::ThreeMonths => 3,
            Duration::SixMonths => 6,
            Duration::TwelveMonths => 12,
        }
    }

    pub fn from_months(months: u8) -> Result<Self> {
        match months {
            1 => Ok(Duration::OneMonth),
            3 => Ok(Duration::ThreeMonths),
            6 => Ok(Duration::SixMonths),
            12 => Ok(Duration::TwelveMonths),
            other => Err(SiteError::UnknownDuration {
                value: other.to_string(),
            }),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Duration::OneMonth => "1 Month",
            Duration::ThreeMonths => "3 Months",
            Duration::SixMonths => "6 Months",
            Duration::TwelveMonths => "12 Months",
        }
    }

    /// Longer commitments carry the "BEST VALUE" badge.
    pub fn is_best_value(&self) -> bool {
        matches!(self, Duration::SixMonths | Duration::TwelveMonths)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Duration::OneMonth => 0,
            Duration::ThreeMonths => 1,
            Duration::SixMonths => 2,
            Duration::TwelveMonths => 3,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.months())
    }
}

impl FromStr for Duration {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| SiteError::UnknownDuration {
                value: trimmed.to_string(),
            })
            .and_then(Duration::from_months)
    }
}

impl TryFrom<String> for Duration {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Duration> for String {
    fn from(duration: Duration) -> Self {
        duration.to_string()
    }
}

/// Which services are switched on. Flags are independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub gym: bool,
    #[serde(alias = "pt")]
    pub personal_training: bool,
    pub nutrition: bool,
}

impl Selection {
    pub fn new(gym: bool, personal_training: bool, nutrition: bool) -> Self {
        Self {
            gym,
            personal_training,
            nutrition,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    pub fn of(services: &[Service]) -> Self {
        services
            .iter()
            .fold(Self::none(), |selection, service| selection.with(*service, true))
    }

    pub fn is_selected(&self, service: Service) -> bool {
        match service {
            Service::Gym => self.gym,
            Service::PersonalTraining => self.personal_training,
            Service::Nutrition => self.nutrition,
        }
    }

    pub fn with(mut self, service: Service, selected: bool) -> Self {
        match service {
            Service::Gym => self.gym = selected,
            Service::PersonalTraining => self.personal_training = selected,
            Service::Nutrition => self.nutrition = selected,
        }
        self
    }

    /// Selected services in catalogue order.
    pub fn services(&self) -> impl Iterator<Item = Service> + '_ {
        Service::ALL
            .into_iter()
            .filter(move |service| self.is_selected(*service))
    }

    pub fn count(&self) -> usize {
        self.services().count()
    }

    pub fn is_all_inclusive(&self) -> bool {
        self.gym && self.personal_training && self.nutrition
    }
}

/// Price breakdown for one selection and duration.
///
/// Amounts are exact; rounding to whole rupees happens only when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub original_price: f64,
    pub final_price: f64,
    #[serde(alias = "discountAmount")]
    pub discount: f64,
    pub is_all_inclusive: bool,
    pub is_best_value: bool,
}

impl Quote {
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

/// Contact form payload sent to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<()> {
        validate_min_chars("name", &self.name, 2, "Name must be at least 2 characters")?;
        validate_email("email", &self.email)?;
        validate_min_chars("phone", &self.phone, 10, "Please enter a valid phone number")?;
        validate_min_chars(
            "interest",
            &self.interest,
            5,
            "Please let us know what you are interested in",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_parsing_accepts_short_key() {
        assert_eq!("gym".parse::<Service>().unwrap(), Service::Gym);
        assert_eq!("pt".parse::<Service>().unwrap(), Service::PersonalTraining);
        assert_eq!(
            "personal-training".parse::<Service>().unwrap(),
            Service::PersonalTraining
        );
        assert_eq!(" nutrition ".parse::<Service>().unwrap(), Service::Nutrition);
    }

    #[test]
    fn test_unknown_service_fails_fast() {
        let err = "yoga".parse::<Service>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownService { ref value } if value == "yoga"));
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!("1".parse::<Duration>().unwrap(), Duration::OneMonth);
        assert_eq!("12".parse::<Duration>().unwrap(), Duration::TwelveMonths);
        assert!(matches!(
            "2".parse::<Duration>(),
            Err(SiteError::UnknownDuration { .. })
        ));
        assert!(matches!(
            "six".parse::<Duration>(),
            Err(SiteError::UnknownDuration { .. })
        ));
        assert!(Duration::from_months(24).is_err());
    }

    #[test]
    fn test_duration_serde_uses_month_strings() {
        let json = serde_json::to_string(&Duration::SixMonths).unwrap();
        assert_eq!(json, "\"6\"");
        let parsed: Duration = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(parsed, Duration::ThreeMonths);
        assert!(serde_json::from_str::<Duration>("\"9\"").is_err());
    }

    #[test]
    fn test_best_value_is_duration_only() {
        let flags: Vec<bool> = Duration::ALL.iter().map(|d| d.is_best_value()).collect();
        assert_eq!(flags, vec![false, false, true, true]);
    }

    #[test]
    fn test_selection_helpers() {
        let selection = Selection::of(&[Service::Nutrition, Service::Gym]);
        assert_eq!(
            selection.services().collect::<Vec<_>>(),
            vec![Service::Gym, Service::Nutrition]
        );
        assert_eq!(selection.count(), 2);
        assert!(!selection.is_all_inclusive());
        assert!(Selection::all().is_all_inclusive());
        assert_eq!(Selection::none().count(), 0);
    }

    #[test]
    fn test_selection_accepts_original_field_name() {
        let selection: Selection =
            serde_json::from_str(r#"{"gym":true,"pt":true,"nutrition":false}"#).unwrap();
        assert_eq!(selection, Selection::new(true, true, false));
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let quote = Quote {
            original_price: 6000.0,
            final_price: 5280.0,
            discount: 720.0,
            is_all_inclusive: true,
            is_best_value: false,
        };
        let value = serde_json::to_value(quote).unwrap();
        assert_eq!(value["originalPrice"], 6000.0);
        assert_eq!(value["finalPrice"], 5280.0);
        assert_eq!(value["isAllInclusive"], true);
        assert_eq!(value["isBestValue"], false);
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            interest: "Plan: gym (1 Months) - ₹2,500".to_string(),
            message: None,
        }
    }

    #[test]
    fn test_contact_submission_validation() {
        assert!(submission().validate().is_ok());

        let short_phone = ContactSubmission {
            phone: "12345".to_string(),
            ..submission()
        };
        assert!(matches!(
            short_phone.validate(),
            Err(SiteError::ContactValidationError { ref field, .. }) if field == "phone"
        ));

        let one_letter_name = ContactSubmission {
            name: "A".to_string(),
            ..submission()
        };
        assert!(matches!(
            one_letter_name.validate(),
            Err(SiteError::ContactValidationError { ref field, .. }) if field == "name"
        ));

        // Raw length, whitespace included, like the site's form schema.
        let padded_name = ContactSubmission {
            name: " A".to_string(),
            ..submission()
        };
        assert!(padded_name.validate().is_ok());

        let no_interest = ContactSubmission {
            interest: String::new(),
            ..submission()
        };
        assert!(no_interest.validate().is_err());
    }
}
