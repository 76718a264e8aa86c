use std::collections::BTreeSet;

use keyword_gap_core::aggregate::{aggregate_by_category, CategoryAggregate, CategoryColumn};
use keyword_gap_core::record::{CompetitorEntry, KeywordColumn, KeywordRecord};
use keyword_gap_core::view::{apply_sort, SortConfig, SortDirection, SortValue};

fn rec(keyword: &str, category: &str, volume: u64) -> KeywordRecord {
    KeywordRecord {
        keyword: keyword.to_string(),
        category: category.to_string(),
        search_volume: volume,
        is_branded: false,
        competitors: vec![CompetitorEntry {
            name: "rival.com".to_string(),
            rank: 1,
        }],
    }
}

fn aggregates() -> Vec<CategoryAggregate> {
    let records = vec![
        rec("a", "Makeup", 300),
        rec("b", "Boxes", 900),
        rec("c", "Skincare", 300),
        rec("d", "Fragrance", 100),
    ];
    let refs: Vec<&KeywordRecord> = records.iter().collect();
    aggregate_by_category(&refs, &BTreeSet::new())
}

#[test]
fn ascending_then_descending_is_exact_reverse_without_ties() {
    let mut rows = aggregates();
    let config = SortConfig::default().request(CategoryColumn::Category);
    apply_sort(&mut rows, &config);
    let ascending: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();
    assert_eq!(ascending, ["Boxes", "Fragrance", "Makeup", "Skincare"]);

    let config = config.request(CategoryColumn::Category);
    assert_eq!(config.direction, SortDirection::Descending);
    apply_sort(&mut rows, &config);
    let descending: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn sorting_twice_with_same_config_is_identical() {
    let mut once = aggregates();
    let config = SortConfig::default().request(CategoryColumn::SearchVolume);
    apply_sort(&mut once, &config);

    let mut twice = once.clone();
    apply_sort(&mut twice, &config);
    assert_eq!(once, twice);
}

#[test]
fn ties_keep_prior_relative_order() {
    let mut rows = aggregates();
    // Makeup and Skincare tie on volume; Makeup precedes Skincare in the
    // unsorted table and must stay ahead after an ascending volume sort.
    let config = SortConfig::default().request(CategoryColumn::SearchVolume);
    apply_sort(&mut rows, &config);
    let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, ["Fragrance", "Makeup", "Skincare", "Boxes"]);
}

#[test]
fn request_toggles_on_same_key_and_resets_on_new_key() {
    let config: SortConfig<CategoryColumn> = SortConfig::default();
    assert_eq!(config.key, None);
    assert_eq!(config.direction, SortDirection::Ascending);

    let config = config.request(CategoryColumn::Count);
    assert_eq!(config.key, Some(CategoryColumn::Count));
    assert_eq!(config.direction, SortDirection::Ascending);

    let config = config.request(CategoryColumn::Count);
    assert_eq!(config.direction, SortDirection::Descending);

    let config = config.request(CategoryColumn::Count);
    assert_eq!(config.direction, SortDirection::Ascending);

    // New key resets to ascending even from a descending state.
    let config = config.request(CategoryColumn::Count).request(CategoryColumn::Category);
    assert_eq!(config.key, Some(CategoryColumn::Category));
    assert_eq!(config.direction, SortDirection::Ascending);
}

#[test]
fn no_key_leaves_natural_order() {
    let mut rows = aggregates();
    let natural: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();
    apply_sort(&mut rows, &SortConfig::<CategoryColumn>::default());
    let after: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();
    assert_eq!(natural, after);
}

#[test]
fn keyword_table_sorts_through_typed_columns() {
    let records = vec![
        rec("vegan lipstick", "Makeup", 50),
        rec("beauty box", "Boxes", 900),
        rec("skincare routine", "Skincare", 300),
    ];
    // The filtered view holds borrowed records; columns sort those directly.
    let mut filtered: Vec<&KeywordRecord> = records.iter().collect();

    let config = SortConfig::default().request(KeywordColumn::SearchVolume);
    apply_sort(&mut filtered, &config);
    let keywords: Vec<&str> = filtered.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(keywords, ["vegan lipstick", "skincare routine", "beauty box"]);

    let config = SortConfig::default().request(KeywordColumn::Keyword);
    apply_sort(&mut filtered, &config);
    let keywords: Vec<&str> = filtered.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(keywords, ["beauty box", "skincare routine", "vegan lipstick"]);
}

#[test]
fn branded_column_sorts_non_branded_first() {
    let mut branded = rec("acme box", "Boxes", 100);
    branded.is_branded = true;
    let records = vec![branded, rec("plain box", "Boxes", 100)];
    let mut rows: Vec<&KeywordRecord> = records.iter().collect();

    let config = SortConfig::default().request(KeywordColumn::Branded);
    apply_sort(&mut rows, &config);
    assert_eq!(rows[0].keyword, "plain box");
    assert_eq!(rows[1].keyword, "acme box");
}

#[test]
fn formatted_percentage_strings_compare_numerically() {
    use std::cmp::Ordering;

    let a = SortValue::Text("9.50".to_string());
    let b = SortValue::Text("12.50".to_string());
    // Lexically "12.50" < "9.50"; numerically it is greater.
    assert_eq!(a.compare(&b), Ordering::Less);

    let a = SortValue::Number(10.0);
    let b = SortValue::Text("9.9".to_string());
    assert_eq!(a.compare(&b), Ordering::Greater);

    // Unparseable text falls back to text comparison.
    let a = SortValue::Text("alpha".to_string());
    let b = SortValue::Text("beta".to_string());
    assert_eq!(a.compare(&b), Ordering::Less);
}
