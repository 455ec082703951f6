//! Analyzers over in-memory draw collections.
//!
//! Every function here is total: empty inputs come back as the explicit
//! no-data `None`, degenerate arguments degrade to `NEG_INFINITY`/`NaN`
//! values rather than errors, and input collections are never mutated.

use crate::models::{
    DateRange, Draw, NumberFrequency, ParsedPrize, PrizeTier, PrizeValues, SortOptions, YearTotal,
    year_of,
};
use crate::sort::{FieldValue, Keyed, comparator};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Maximum value of the field `key` across `items`.
///
/// An empty collection yields `NEG_INFINITY`. Records whose field is
/// missing or non-numeric contribute `NaN`, and NaN wins the fold once
/// present. An empty `key` is reported through a non-fatal `log` warning
/// and the computation still proceeds.
pub fn max_field<T: Keyed>(items: &[T], key: &str) -> f64 {
    if key.is_empty() {
        log::warn!("max_field: a field key is required");
    }
    items.iter().fold(f64::NEG_INFINITY, |acc, item| {
        let v = item
            .field(key)
            .map(FieldValue::as_f64)
            .unwrap_or(f64::NAN);
        // f64::max drops NaN operands; the reducer must keep them.
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}

/// Count how often each number appears across all draws' `primary`
/// sequences, then rank and trim per `options`.
///
/// Returns `None` for an empty draw collection (the no-data signal,
/// distinct from an empty result). Entries keep first-appearance order
/// unless `options.sort_dir` requests an ordering; `options.sort_key`
/// names the field to rank by (`"count"` or `"number"`) and
/// `options.count` limits the result length.
pub fn number_frequencies(items: &[Draw], options: &SortOptions) -> Option<Vec<NumberFrequency>> {
    if items.is_empty() {
        return None;
    }

    let mut frequencies: Vec<NumberFrequency> = Vec::new();
    let mut index: AHashMap<u32, usize> = AHashMap::new();
    for draw in items {
        for &number in &draw.primary {
            match index.get(&number) {
                Some(&at) => frequencies[at].count += 1,
                None => {
                    index.insert(number, frequencies.len());
                    frequencies.push(NumberFrequency { number, count: 1 });
                }
            }
        }
    }

    if let Some(cmp) = comparator(options.sort_dir, &options.sort_key) {
        frequencies.sort_by(|a, b| cmp(a, b));
    }
    if let Some(limit) = options.count {
        frequencies.truncate(limit);
    }
    Some(frequencies)
}

fn tier_max(draw: &Draw, tier: &str) -> f64 {
    let matching: Vec<&PrizeTier> = draw.prizes.iter().filter(|p| p.name == tier).collect();
    max_field(&matching, "share")
}

/// Rank draws by the payout of the prize tier named `options.sort_key`,
/// dropping draws where that tier paid nothing.
///
/// Returns `None` for an empty draw collection. A draw carrying no tier
/// of that name has a tier maximum of `NEG_INFINITY`, which is not equal
/// to zero, so it survives the filter; this mirrors the behavior the
/// presentation layer was built against. An unset `sort_dir` applies no
/// reordering.
pub fn ranked_prize_draws(items: &[Draw], options: &SortOptions) -> Option<Vec<Draw>> {
    if items.is_empty() {
        return None;
    }

    let mut winners: Vec<Draw> = items
        .iter()
        .filter(|draw| tier_max(draw, &options.sort_key) != 0.0)
        .cloned()
        .collect();

    if let Some(dir) = options.sort_dir {
        use crate::models::SortDir;
        winners.sort_by(|a, b| {
            let (lhs, rhs) = match dir {
                SortDir::Asc => (a, b),
                SortDir::Desc => (b, a),
            };
            tier_max(lhs, &options.sort_key)
                .partial_cmp(&tier_max(rhs, &options.sort_key))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
    if let Some(limit) = options.count {
        winners.truncate(limit);
    }
    Some(winners)
}

/// Decode tier labels into match counts, attaching the owning draw's date.
///
/// The primary count is the first character of the label; the bonus count
/// is the third character when the second is the bonus marker `+`, else 0.
/// Non-digit characters decode to `None` instead of failing the call.
pub fn parse_prizes(prizes: &[PrizeTier], date: &str) -> Vec<ParsedPrize> {
    prizes
        .iter()
        .map(|prize| {
            let mut chars = prize.name.chars();
            let first = chars.next();
            let second = chars.next();
            let third = chars.next();

            let primary = first.and_then(|c| c.to_digit(10));
            let secondary = if second == Some('+') {
                third.and_then(|c| c.to_digit(10))
            } else {
                Some(0)
            };

            ParsedPrize {
                name: prize.name.clone(),
                date: date.to_string(),
                share: prize.share,
                values: PrizeValues { primary, secondary },
            }
        })
        .collect()
}

/// Sum the payouts of the tier named `options.sort_key` per calendar year.
///
/// Runs [`ranked_prize_draws`] first, so the same filter (and its
/// absent-tier edge) applies. Output is always ascending by year, whatever
/// `options.sort_dir` asked for; the per-year accumulation happens in a
/// `BTreeMap`, whose iteration order is that presentation order.
pub fn yearly_prize_totals(items: &[Draw], options: &SortOptions) -> Option<Vec<YearTotal>> {
    let ranked = ranked_prize_draws(items, options)?;

    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for draw in &ranked {
        let year = year_of(&draw.date);
        let amount = tier_max(draw, &options.sort_key);
        *totals.entry(year).or_insert(0.0) += amount;
    }

    Some(
        totals
            .into_iter()
            .map(|(year, year_total)| YearTotal { year, year_total })
            .collect(),
    )
}

/// Lexicographic min and max of the `date` field across `items`.
///
/// No calendar parsing happens here; correctness depends on the date
/// strings being order-preserving with chronological order (`YYYY-MM-DD`).
/// The empty-string seed loses to the first real date unconditionally.
pub fn date_range<T: Keyed>(items: &[T]) -> DateRange {
    let mut range = DateRange {
        min: String::new(),
        max: String::new(),
    };
    for item in items {
        let Some(FieldValue::Text(date)) = item.field("date") else {
            continue;
        };
        if range.min.is_empty() || date < range.min.as_str() {
            range.min = date.to_string();
        }
        if range.max.is_empty() || date > range.max.as_str() {
            range.max = date.to_string();
        }
    }
    range
}
