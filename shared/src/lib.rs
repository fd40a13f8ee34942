use serde::{Deserialize, Serialize};
use std::fmt;

/// Tip percentage offered by the form (exclusive choice, no free-text path)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TipPercent {
    Ten,
    #[default]
    Fifteen,
    Twenty,
    TwentyFive,
}

impl TipPercent {
    /// All options in the order they are rendered in the radio group
    pub const ALL: [TipPercent; 4] = [
        TipPercent::Ten,
        TipPercent::Fifteen,
        TipPercent::Twenty,
        TipPercent::TwentyFive,
    ];

    /// Percentage points as a float (e.g. 15.0 for fifteen percent)
    pub fn as_f64(self) -> f64 {
        match self {
            TipPercent::Ten => 10.0,
            TipPercent::Fifteen => 15.0,
            TipPercent::Twenty => 20.0,
            TipPercent::TwentyFive => 25.0,
        }
    }

    /// Label for display next to the radio button
    pub fn label(self) -> &'static str {
        match self {
            TipPercent::Ten => "10%",
            TipPercent::Fifteen => "15%",
            TipPercent::Twenty => "20%",
            TipPercent::TwentyFive => "25%",
        }
    }
}

impl fmt::Display for TipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for percentage values outside the fixed option set
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unsupported tip percentage: {0}")]
pub struct TipPercentError(pub f64);

impl TryFrom<f64> for TipPercent {
    type Error = TipPercentError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        match value {
            v if v == 10.0 => Ok(TipPercent::Ten),
            v if v == 15.0 => Ok(TipPercent::Fifteen),
            v if v == 20.0 => Ok(TipPercent::Twenty),
            v if v == 25.0 => Ok(TipPercent::TwentyFive),
            other => Err(TipPercentError(other)),
        }
    }
}

/// Normalized snapshot of the four form inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipInputs {
    /// Bill amount in currency units (never negative)
    pub amount: f64,
    /// Selected tip percentage
    pub tip_percent: TipPercent,
    /// Number of people splitting the bill (never zero)
    pub people: u32,
    /// Whether to round the tip up to the next whole currency unit
    pub round_up: bool,
}

impl Default for TipInputs {
    fn default() -> Self {
        Self {
            amount: 0.0,
            tip_percent: TipPercent::default(),
            people: 1,
            round_up: false,
        }
    }
}

impl TipInputs {
    /// Build a normalized snapshot from raw form text.
    ///
    /// Invalid or empty bill text becomes 0.0; invalid, empty, or zero
    /// people text becomes 1. Nothing is ever rejected.
    pub fn from_raw(
        amount_text: &str,
        tip_percent: TipPercent,
        people_text: &str,
        round_up: bool,
    ) -> Self {
        Self {
            amount: parse_bill_amount(amount_text),
            tip_percent,
            people: parse_people_count(people_text),
            round_up,
        }
    }
}

/// Derived outputs, recomputed from the inputs on every change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipBreakdown {
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
}

impl TipBreakdown {
    /// Compute tip, total, and per-person amounts from a normalized snapshot.
    ///
    /// `people >= 1` is guaranteed by normalization, so the division is safe.
    pub fn compute(inputs: &TipInputs) -> Self {
        let tip = calculate_tip(inputs.amount, inputs.tip_percent.as_f64(), inputs.round_up);
        let total = inputs.amount + tip;
        let per_person = total / inputs.people as f64;
        Self {
            tip,
            total,
            per_person,
        }
    }
}

/// Calculate the tip for a bill amount.
///
/// When `round_up` is set the tip is rounded up to the nearest whole
/// currency unit; otherwise the raw fractional value is returned.
pub fn calculate_tip(amount: f64, tip_percent: f64, round_up: bool) -> f64 {
    let tip = tip_percent / 100.0 * amount;
    if round_up {
        tip.ceil()
    } else {
        tip
    }
}

/// Parse bill-amount text, normalizing anything unusable to 0.0.
///
/// Negative and non-finite values are treated as unusable since the
/// bill-amount domain is non-negative.
pub fn parse_bill_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Parse people-count text, normalizing anything unusable to 1.
///
/// Zero is unusable too; the count must stay >= 1 so the per-person
/// division never divides by zero.
pub fn parse_people_count(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(1).max(1)
}

/// Format an amount as currency for display, e.g. "$10.00"
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_tip_basic() {
        // Zero bill yields zero tip regardless of percentage
        assert_eq!(calculate_tip(0.0, 15.0, false), 0.0);
        assert_eq!(calculate_tip(0.0, 25.0, false), 0.0);

        // Plain percentage of the bill
        assert_eq!(calculate_tip(100.0, 15.0, false), 15.0);
        assert_eq!(calculate_tip(50.0, 20.0, false), 10.0);
    }

    #[test]
    fn test_calculate_tip_round_up() {
        // Already a whole amount - rounding up changes nothing
        assert_eq!(calculate_tip(100.0, 15.0, true), 15.0);

        // Fractional tip rounds up to the next whole unit
        assert_eq!(calculate_tip(97.0, 15.0, true), 15.0); // ceil(14.55)
        assert_eq!(calculate_tip(33.33, 10.0, true), 4.0); // ceil(3.333)
    }

    #[test]
    fn test_round_up_never_decreases_tip() {
        let amounts = [0.0, 0.01, 9.99, 33.33, 50.0, 97.0, 100.0, 1234.56];
        let percents = [0.0, 10.0, 15.0, 20.0, 25.0];
        for &amount in &amounts {
            for &percent in &percents {
                let raw = calculate_tip(amount, percent, false);
                let rounded = calculate_tip(amount, percent, true);
                assert!(
                    rounded >= raw,
                    "round-up lowered the tip for amount={} percent={}",
                    amount,
                    percent
                );
            }
        }
    }

    #[test]
    fn test_parse_bill_amount() {
        // Normal input
        assert_eq!(parse_bill_amount("50.00"), 50.0);
        assert_eq!(parse_bill_amount("  33.33  "), 33.33);

        // Empty and non-numeric text normalize to zero
        assert_eq!(parse_bill_amount(""), 0.0);
        assert_eq!(parse_bill_amount("abc"), 0.0);
        assert_eq!(parse_bill_amount("12.3.4"), 0.0);

        // Negative and non-finite values are outside the bill domain
        assert_eq!(parse_bill_amount("-5"), 0.0);
        assert_eq!(parse_bill_amount("NaN"), 0.0);
        assert_eq!(parse_bill_amount("inf"), 0.0);
    }

    #[test]
    fn test_parse_people_count() {
        // Normal input
        assert_eq!(parse_people_count("4"), 4);
        assert_eq!(parse_people_count(" 2 "), 2);

        // Empty and non-numeric text normalize to one
        assert_eq!(parse_people_count(""), 1);
        assert_eq!(parse_people_count("two"), 1);
        assert_eq!(parse_people_count("1.5"), 1);

        // Zero and negatives never survive normalization
        assert_eq!(parse_people_count("0"), 1);
        assert_eq!(parse_people_count("-3"), 1);
    }

    #[test]
    fn test_tip_percent_options() {
        // Default selection is 15%
        assert_eq!(TipPercent::default(), TipPercent::Fifteen);

        // The option set is exactly {10, 15, 20, 25}
        let values: Vec<f64> = TipPercent::ALL.iter().map(|p| p.as_f64()).collect();
        assert_eq!(values, vec![10.0, 15.0, 20.0, 25.0]);

        // Labels render with a percent sign
        assert_eq!(TipPercent::Twenty.label(), "20%");
        assert_eq!(TipPercent::TwentyFive.to_string(), "25%");
    }

    #[test]
    fn test_tip_percent_try_from() {
        // Values in the fixed set convert
        assert_eq!(TipPercent::try_from(10.0).unwrap(), TipPercent::Ten);
        assert_eq!(TipPercent::try_from(25.0).unwrap(), TipPercent::TwentyFive);

        // Anything else is a typed error carrying the rejected value
        assert_eq!(TipPercent::try_from(13.0), Err(TipPercentError(13.0)));
        assert_eq!(TipPercent::try_from(0.0), Err(TipPercentError(0.0)));
    }

    #[test]
    fn test_breakdown_even_split() {
        // 50.00 at 20% across 4 people, no rounding
        let inputs = TipInputs::from_raw("50.00", TipPercent::Twenty, "4", false);
        let breakdown = TipBreakdown::compute(&inputs);
        assert_eq!(breakdown.tip, 10.0);
        assert_eq!(breakdown.total, 60.0);
        assert_eq!(breakdown.per_person, 15.0);
    }

    #[test]
    fn test_breakdown_round_up_integral_tip() {
        // 50.00 at 20% is already a whole tip, so round-up is a no-op
        let inputs = TipInputs::from_raw("50.00", TipPercent::Twenty, "3", true);
        let breakdown = TipBreakdown::compute(&inputs);
        assert_eq!(breakdown.tip, 10.0);
        assert_eq!(breakdown.total, 60.0);
        assert_eq!(breakdown.per_person, 20.0);
    }

    #[test]
    fn test_breakdown_empty_inputs() {
        // Empty bill text: everything collapses to zero
        let inputs = TipInputs::from_raw("", TipPercent::Fifteen, "2", false);
        let breakdown = TipBreakdown::compute(&inputs);
        assert_eq!(breakdown.tip, 0.0);
        assert_eq!(breakdown.total, 0.0);
        assert_eq!(breakdown.per_person, 0.0);

        // Empty people text: split across one person, per-person == total
        let inputs = TipInputs::from_raw("100", TipPercent::Fifteen, "", false);
        assert_eq!(inputs.people, 1);
        let breakdown = TipBreakdown::compute(&inputs);
        assert_eq!(breakdown.per_person, breakdown.total);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(15.0), "$15.00");
        assert_eq!(format_currency(3.333), "$3.33");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_inputs_serde_round_trip() {
        let inputs = TipInputs::from_raw("97", TipPercent::Fifteen, "3", true);
        let json = serde_json::to_string(&inputs).unwrap();
        let back: TipInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
