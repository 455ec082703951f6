use serde::{Deserialize, Serialize};

/// Sort direction for ranking operations.
///
/// The absence of a direction (`Option::None` at the call site) means
/// "no ordering requested": analyzers keep the collection's current order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Per-call configuration for the ranking analyzers.
///
/// Constructed by the caller for every call; the library keeps no default
/// options object. For [`crate::stats::number_frequencies`] `sort_key`
/// names a record field (`"number"` or `"count"`); for
/// [`crate::stats::ranked_prize_draws`] and
/// [`crate::stats::yearly_prize_totals`] it names a prize tier
/// (e.g. `"7 oikein"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOptions {
    /// Result-size limit: keep only the first `count` entries after ranking.
    pub count: Option<usize>,
    /// Requested ordering; `None` keeps the current order.
    pub sort_dir: Option<SortDir>,
    /// Field name or tier name, depending on the operation.
    pub sort_key: String,
    /// Accepted for feed compatibility; no current operation groups by it.
    pub group_by: String,
}

/// One payout tier of a draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Human-readable tier label, e.g. `"7 oikein"` or `"5+1 oikein"`.
    pub name: String,
    /// Payout amount. Zero means no winner for this tier in this draw.
    /// Some feeds encode `share` as a string, others as a number; accept
    /// both and normalize to `f64`.
    #[serde(deserialize_with = "de_f64_from_string_or_number")]
    pub share: f64,
}

/// Serde helper: parse `f64` from either a JSON number or a string.
fn de_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or number representing a payout amount")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<f64>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(F64Visitor)
}

/// One lottery event as supplied by the external loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    /// Draw date in a lexicographically-sortable ISO-like format
    /// (`YYYY-MM-DD`). Never parsed into a calendar type except to
    /// extract the year.
    pub date: String,
    /// The numbers drawn, in draw order. Non-empty when present.
    pub primary: Vec<u32>,
    /// Payout tiers for this draw; may be empty.
    #[serde(default)]
    pub prizes: Vec<PrizeTier>,
}

/// Match counts decoded from a tier label.
///
/// `None` marks a label character that is not a decimal digit; decoding
/// is total and never fails the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeValues {
    /// Primary match count, from the first character of the label.
    pub primary: Option<u32>,
    /// Bonus match count, from the third character when the second is
    /// the bonus marker `+`; otherwise 0.
    pub secondary: Option<u32>,
}

/// A prize tier with its owning draw's date attached and its label decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPrize {
    pub name: String,
    pub date: String,
    pub share: f64,
    pub values: PrizeValues,
}

/// How often one number appeared across all supplied draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFrequency {
    pub number: u32,
    pub count: u32,
}

/// Sum of a chosen tier's payouts across all draws of one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub year_total: f64,
}

/// Lexicographic extrema of the `date` field across a collection.
///
/// Both fields are empty strings for an empty input; the first real date
/// always replaces the empty seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: String,
    pub max: String,
}

/// Extract the calendar year from an ISO-like date string.
///
/// Tries a full `YYYY-MM-DD` parse first, then falls back to the leading
/// four characters. Unparseable dates yield year 0.
pub fn year_of(date: &str) -> i32 {
    use chrono::Datelike;
    if let Ok(d) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return d.year();
    }
    date.get(..4)
        .and_then(|y| y.parse::<i32>().ok())
        .unwrap_or(0)
}
