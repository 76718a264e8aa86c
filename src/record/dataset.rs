use std::collections::BTreeSet;

use thiserror::Error;

use crate::record::model::KeywordRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Invalid record payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate keyword: {0}")]
    DuplicateKeyword(String),
}

/// The authoritative, ordered record collection.
///
/// Construction is the ONLY fallible boundary of the engine: it rejects
/// duplicate keyword keys and undecodable payloads. Everything downstream is
/// infallible by construction.
///
/// The category and competitor universes are derived here, once, in
/// first-occurrence order, and passed explicitly to every component that
/// needs stable output columns — consumers never re-derive them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<KeywordRecord>,
    categories: Vec<String>,
    competitors: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<KeywordRecord>) -> Result<Self, DatasetError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.keyword.as_str()) {
                return Err(DatasetError::DuplicateKeyword(record.keyword.clone()));
            }
        }

        let categories = first_occurrence(records.iter().map(|r| r.category.as_str()));
        let competitors = first_occurrence(
            records
                .iter()
                .flat_map(|r| r.competitors.iter().map(|c| c.name.as_str())),
        );

        Ok(Dataset {
            records,
            categories,
            competitors,
        })
    }

    /// Ingest a JSON array of records, as shipped by the upstream loader.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let records: Vec<KeywordRecord> = serde_json::from_slice(bytes)?;
        Self::new(records)
    }

    pub fn records(&self) -> &[KeywordRecord] {
        &self.records
    }

    /// Category universe, first-occurrence order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Competitor universe, first-occurrence order.
    pub fn competitors(&self) -> &[String] {
        &self.competitors
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn first_occurrence<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut ordered = Vec::new();
    for value in values {
        if seen.insert(value) {
            ordered.push(value.to_string());
        }
    }
    ordered
}
