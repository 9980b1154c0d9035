use crate::domain::model::{Duration, Quote};
use serde::Serialize;

/// Rounds like the browser's `Math.round`: halves go up, also for negatives.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Indian digit grouping (`12,34,567`): the last three digits, then pairs.
pub fn format_en_in(value: f64, max_fraction_digits: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", max_fraction_digits, value.abs());

    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let grouped = group_indian(integer);
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee label, e.g. `₹12,000`. The only place amounts get rounded.
pub fn format_rupees(amount: f64) -> String {
    format!("₹{}", format_en_in(round_half_up(amount), 0))
}

/// Render-ready strings for the quote panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    pub price_label: String,
    /// Struck-through original price, only shown when a discount applies.
    pub original_label: Option<String>,
    pub lock_in_enabled: bool,
}

impl QuoteView {
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            price_label: format_rupees(quote.final_price),
            original_label: quote
                .has_discount()
                .then(|| format!("Original: {}", format_rupees(quote.original_price))),
            lock_in_enabled: quote.final_price != 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationTab {
    pub duration: Duration,
    pub label: &'static str,
    pub active: bool,
    pub best_value_badge: bool,
}

/// One tab per duration. The badge sits on the 6 and 12 month tabs and is
/// visible while the current quote is flagged best value.
pub fn duration_tabs(active: Duration, quote: &Quote) -> Vec<DurationTab> {
    Duration::ALL
        .into_iter()
        .map(|duration| DurationTab {
            duration,
            label: duration.display_name(),
            active: duration == active,
            best_value_badge: duration.is_best_value() && quote.is_best_value,
        })
        .collect()
}
