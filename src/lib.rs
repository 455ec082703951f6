//! lotto_stats
//!
//! A lightweight Rust library for summarizing lottery draw history:
//! number frequencies, prize-tier rankings, yearly payout totals, and the
//! date span of a data set. Pairs with an external loader/presentation
//! layer that supplies draw records and renders the summaries.
//!
//! ### Features
//! - Count and rank winning-number frequencies across draws
//! - Filter and rank draws by the payout of a chosen prize tier
//! - Decode tier labels ("5+1 oikein") into match counts
//! - Sum a tier's payouts per calendar year
//! - Find the first and last draw date of a collection
//!
//! ### Example
//! ```
//! use lotto_stats::{Draw, SortDir, SortOptions, stats};
//!
//! let draws: Vec<Draw> = serde_json::from_str(
//!     r#"[
//!       {"date":"2019-05-05","primary":[3,7,21],
//!        "prizes":[{"name":"7 oikein","share":"1500000.00"}]},
//!       {"date":"2020-01-01","primary":[7,9,21],
//!        "prizes":[{"name":"7 oikein","share":0}]}
//!     ]"#,
//! )?;
//!
//! let options = SortOptions {
//!     count: Some(2),
//!     sort_dir: Some(SortDir::Desc),
//!     sort_key: "count".into(),
//!     group_by: String::new(),
//! };
//! let hot = stats::number_frequencies(&draws, &options)
//!     .expect("draws were supplied");
//! assert_eq!(hot[0].count, 2); // 7 and 21 both appeared twice
//!
//! let span = stats::date_range(&draws);
//! assert_eq!(span.min, "2019-05-05");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod models;
pub mod sort;
pub mod stats;

pub use models::{
    DateRange, Draw, NumberFrequency, ParsedPrize, PrizeTier, PrizeValues, SortDir, SortOptions,
    YearTotal,
};
pub use sort::{FieldValue, Keyed};
