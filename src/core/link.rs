use crate::core::display::format_en_in;
use crate::domain::model::{Duration, Quote, Selection};
use url::form_urlencoded;

pub const DEFAULT_CONTACT_ANCHOR: &str = "/#contact";

/// "Lock in this rate" link: the contact form reads the plan back from it.
///
/// `price` carries the unrounded final price.
pub fn lock_in_href(
    anchor: &str,
    selection: &Selection,
    duration: Duration,
    quote: &Quote,
) -> String {
    let services = selection
        .services()
        .map(|service| service.id())
        .collect::<Vec<_>>()
        .join(", ");

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("services", &services)
        .append_pair("duration", &format!("{} Months", duration.months()))
        .append_pair("price", &quote.final_price.to_string())
        .finish();

    format!("{}?{}", anchor, query)
}

/// Prefill for the contact form's "interest" field.
///
/// Accepts a full link, a `?query` or a bare query. Returns `None` unless
/// services, duration and a numeric price are all present.
pub fn interest_from_query(link: &str) -> Option<String> {
    let query = link.rsplit_once('?').map_or(link, |(_, query)| query);

    let mut services = None;
    let mut duration = None;
    let mut price = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "services" => services = Some(value.into_owned()),
            "duration" => duration = Some(value.into_owned()),
            "price" => price = Some(value.into_owned()),
            _ => {}
        }
    }

    let services = services.filter(|s| !s.is_empty())?;
    let duration = duration.filter(|d| !d.is_empty())?;
    let price: f64 = price?.trim().parse().ok().filter(|p: &f64| p.is_finite())?;

    Some(format!(
        "Plan: {} ({}) - ₹{}",
        services,
        duration,
        format_en_in(price, 3)
    ))
}
