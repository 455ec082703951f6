//! Comparator factory used by all ranking operations.
//!
//! Records expose their sortable fields by name through [`Keyed`];
//! [`comparator`] turns a direction plus a field name into a signed
//! [`Ordering`] function, or `None` when no ordering was requested.

use crate::models::{
    Draw, NumberFrequency, ParsedPrize, PrizeTier, SortDir, YearTotal,
};
use std::cmp::Ordering;

/// Runtime value of a named record field.
///
/// Text compares lexicographically, numbers numerically. Comparing unlike
/// variants (mixed field types across records) is implementation-defined
/// and yields `Ordering::Equal`; it is accepted behavior, not guarded
/// against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl<'a> FieldValue<'a> {
    /// Numeric view of the value; text fields are not numbers.
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Int(v) => v as f64,
            FieldValue::Float(v) => v,
            FieldValue::Text(_) => f64::NAN,
        }
    }

    fn compare(self, other: FieldValue<'a>) -> Ordering {
        match (self, other) {
            (FieldValue::Int(x), FieldValue::Int(y)) => x.cmp(&y),
            (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
            (FieldValue::Int(_) | FieldValue::Float(_), FieldValue::Int(_) | FieldValue::Float(_)) => {
                self.as_f64().partial_cmp(&other.as_f64()).unwrap_or(Ordering::Equal)
            }
            _ => Ordering::Equal,
        }
    }
}

/// Named-field access for sortable records.
pub trait Keyed {
    /// Value of the field called `key`, or `None` if the record has no
    /// such field (unknown keys compare equal).
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}

impl Keyed for NumberFrequency {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "number" => Some(FieldValue::Int(self.number as i64)),
            "count" => Some(FieldValue::Int(self.count as i64)),
            _ => None,
        }
    }
}

impl Keyed for YearTotal {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "year" => Some(FieldValue::Int(self.year as i64)),
            "year_total" => Some(FieldValue::Float(self.year_total)),
            _ => None,
        }
    }
}

impl Keyed for PrizeTier {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "share" => Some(FieldValue::Float(self.share)),
            _ => None,
        }
    }
}

impl Keyed for ParsedPrize {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "date" => Some(FieldValue::Text(&self.date)),
            "share" => Some(FieldValue::Float(self.share)),
            _ => None,
        }
    }
}

impl Keyed for Draw {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "date" => Some(FieldValue::Text(&self.date)),
            _ => None,
        }
    }
}

fn field_cmp<T: Keyed>(a: &T, b: &T, key: &str) -> Ordering {
    match (a.field(key), b.field(key)) {
        (Some(x), Some(y)) => x.compare(y),
        _ => Ordering::Equal,
    }
}

/// Build an ordering function over records exposing the field `key`.
///
/// `None` direction yields `None`: the caller keeps the collection's
/// current order instead of sorting. `Desc` swaps operand order rather
/// than negating the comparison.
pub fn comparator<T: Keyed>(
    dir: Option<SortDir>,
    key: &str,
) -> Option<impl Fn(&T, &T) -> Ordering> {
    let dir = dir?;
    Some(move |a: &T, b: &T| {
        let (lhs, rhs) = match dir {
            SortDir::Asc => (a, b),
            SortDir::Desc => (b, a),
        };
        field_cmp(lhs, rhs, key)
    })
}
