use crate::filter::criteria::FilterCriteria;
use crate::record::model::KeywordRecord;

/// Whether a single record satisfies every filter predicate.
///
/// The competitor clause is existential over the record's competitor list:
/// at least one entry must have an allowed name AND a rank inside the range.
/// An empty competitor list therefore fails the clause, except when both
/// competitor predicates are at their unrestricted defaults — then the
/// clause is vacuously true.
pub fn matches(record: &KeywordRecord, criteria: &FilterCriteria) -> bool {
    let category_match =
        criteria.categories.is_empty() || criteria.categories.contains(&record.category);
    let volume_match = record.search_volume >= criteria.min_volume;
    let branded_match = !criteria.branded_only || record.is_branded;
    let keyword_match = criteria.keyword_query.matches(&record.keyword);

    let competitor_match = criteria.competitor_clause_unrestricted()
        || record.competitors.iter().any(|comp| {
            (criteria.competitors.is_empty() || criteria.competitors.contains(&comp.name))
                && criteria.rank_range.contains(comp.rank)
        });

    category_match && volume_match && branded_match && keyword_match && competitor_match
}

/// Reduce a record collection to the subset passing `criteria`.
/// Pure and order-preserving: output keeps the input's relative order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a KeywordRecord>
where
    I: IntoIterator<Item = &'a KeywordRecord>,
{
    records
        .into_iter()
        .filter(|record| matches(record, criteria))
        .collect()
}
