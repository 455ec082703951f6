use lotto_stats::models::{Draw, PrizeValues};
use lotto_stats::stats::parse_prizes;

#[test]
fn draw_share_accepts_string_or_number() {
    // share as string
    let d: Draw = serde_json::from_str(
        r#"{"date":"2019-05-05","primary":[1,2,3],
            "prizes":[{"name":"7 oikein","share":"2400000.00"}]}"#,
    )
    .unwrap();
    assert_eq!(d.prizes[0].share, 2_400_000.0);

    // share as number
    let d: Draw = serde_json::from_str(
        r#"{"date":"2019-05-05","primary":[1,2,3],
            "prizes":[{"name":"7 oikein","share":2400000}]}"#,
    )
    .unwrap();
    assert_eq!(d.prizes[0].share, 2_400_000.0);
}

#[test]
fn draw_without_prizes_deserializes_to_empty_tier_list() {
    let d: Draw = serde_json::from_str(r#"{"date":"2020-02-08","primary":[4,8,15,16,23,42]}"#)
        .unwrap();
    assert_eq!(d.primary.len(), 6);
    assert!(d.prizes.is_empty());
}

#[test]
fn parse_prizes_plain_label() {
    let d: Draw = serde_json::from_str(
        r#"{"date":"2019-05-05","primary":[1],
            "prizes":[{"name":"7 oikein","share":1000000}]}"#,
    )
    .unwrap();
    let parsed = parse_prizes(&d.prizes, &d.date);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name, "7 oikein");
    assert_eq!(parsed[0].date, "2019-05-05");
    assert_eq!(parsed[0].share, 1_000_000.0);
    assert_eq!(
        parsed[0].values,
        PrizeValues {
            primary: Some(7),
            secondary: Some(0)
        }
    );
}

#[test]
fn parse_prizes_bonus_label() {
    let d: Draw = serde_json::from_str(
        r#"{"date":"2019-05-05","primary":[1],
            "prizes":[{"name":"5+1 oikein","share":"2500.50"}]}"#,
    )
    .unwrap();
    let parsed = parse_prizes(&d.prizes, &d.date);
    assert_eq!(
        parsed[0].values,
        PrizeValues {
            primary: Some(5),
            secondary: Some(1)
        }
    );
}

#[test]
fn parsed_prizes_serialize_for_the_presentation_layer() {
    let d: Draw = serde_json::from_str(
        r#"{"date":"2019-05-05","primary":[1],
            "prizes":[{"name":"6+1 oikein","share":150000}]}"#,
    )
    .unwrap();
    let parsed = parse_prizes(&d.prizes, &d.date);
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json[0]["values"]["primary"], 6);
    assert_eq!(json[0]["values"]["secondary"], 1);
    assert_eq!(json[0]["date"], "2019-05-05");
}
