use lotto_stats::models::{Draw, PrizeTier, SortDir, SortOptions};
use lotto_stats::stats::yearly_prize_totals;

const TIER: &str = "6+1 oikein";

fn draw(date: &str, share: f64) -> Draw {
    Draw {
        date: date.into(),
        primary: vec![1, 2, 3],
        prizes: vec![PrizeTier {
            name: TIER.into(),
            share,
        }],
    }
}

fn opts(sort_dir: Option<SortDir>) -> SortOptions {
    SortOptions {
        count: None,
        sort_dir,
        sort_key: TIER.into(),
        group_by: String::new(),
    }
}

#[test]
fn empty_input_is_no_data() {
    assert!(yearly_prize_totals(&[], &opts(None)).is_none());
}

#[test]
fn payouts_accumulate_per_year() {
    let draws = vec![
        draw("2019-02-02", 100_000.0),
        draw("2019-11-23", 50_000.0),
        draw("2020-01-04", 75_000.0),
    ];
    let got = yearly_prize_totals(&draws, &opts(None)).unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].year, 2019);
    assert_eq!(got[0].year_total, 150_000.0);
    assert_eq!(got[1].year, 2020);
    assert_eq!(got[1].year_total, 75_000.0);
}

#[test]
fn zero_share_draws_do_not_contribute() {
    let draws = vec![draw("2019-02-02", 100_000.0), draw("2019-11-23", 0.0)];
    let got = yearly_prize_totals(&draws, &opts(None)).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].year_total, 100_000.0);
}

#[test]
fn output_is_ascending_by_year_for_every_direction() {
    let draws = vec![
        draw("2021-03-03", 10.0),
        draw("2019-05-05", 20.0),
        draw("2020-01-01", 30.0),
    ];
    for dir in [None, Some(SortDir::Asc), Some(SortDir::Desc)] {
        let got = yearly_prize_totals(&draws, &opts(dir)).unwrap();
        let years: Vec<i32> = got.iter().map(|t| t.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021], "sort_dir {:?}", dir);
    }
}

#[test]
fn biggest_tier_share_per_draw_is_what_gets_summed() {
    let mut d = draw("2019-05-05", 1_000.0);
    d.prizes.push(PrizeTier {
        name: TIER.into(),
        share: 4_000.0,
    });
    let got = yearly_prize_totals(&[d], &opts(None)).unwrap();
    assert_eq!(got[0].year_total, 4_000.0);
}
