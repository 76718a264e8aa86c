use keyword_gap_core::aggregate::{BrandedSplit, CategoryAggregate};
use keyword_gap_core::voice::{CompetitorTotal, Metrics};

#[test]
fn golden_competitor_total_serialization() {
    let total = CompetitorTotal {
        name: "rival.com".to_string(),
        metrics: Metrics {
            count: 42,
            search_volume: 125000,
            estimated_traffic: 3980.0,
        },
        count_percentage: 25.0,
        volume_percentage: 40.5,
        traffic_percentage: 33.25,
    };

    let json_str = serde_json::to_string_pretty(&total).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "name": "rival.com",
      "metrics": {
        "count": 42,
        "search_volume": 125000,
        "estimated_traffic": 3980.0
      },
      "count_percentage": 25.0,
      "volume_percentage": 40.5,
      "traffic_percentage": 33.25
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String =
        EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(
        normalized_actual, normalized_expected,
        "JSON structure mismatch against golden snapshot"
    );

    let roundtrip: CompetitorTotal = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, total);
}

#[test]
fn golden_category_aggregate_serialization() {
    let aggregate = CategoryAggregate {
        category: "Boxes".to_string(),
        count: 12,
        search_volume: 48000,
        branded: BrandedSplit {
            count: 4,
            search_volume: 9000,
        },
        non_branded: BrandedSplit {
            count: 8,
            search_volume: 39000,
        },
        count_percentage: 60.0,
        volume_percentage: 75.0,
    };

    let json_str = serde_json::to_string_pretty(&aggregate).unwrap();

    // Key order is load-bearing for downstream table consumers.
    let category_pos = json_str.find("\"category\":").unwrap();
    let branded_pos = json_str.find("\"branded\":").unwrap();
    let volume_pct_pos = json_str.find("\"volume_percentage\":").unwrap();
    assert!(category_pos < branded_pos);
    assert!(branded_pos < volume_pct_pos);

    let roundtrip: CategoryAggregate = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, aggregate);
}
