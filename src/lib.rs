//! Deterministic keyword-gap analytics engine.
//!
//! `keyword-gap-core` turns an in-memory collection of keyword-competition
//! records plus filter/sort/selection parameters into the derived datasets a
//! presentation layer consumes: filtered subsets, category aggregates with
//! branded breakdowns, competitor rank buckets with CTR-weighted estimated
//! traffic ("share of voice"), stable multi-key sorts, page slices, and
//! delimited-text exports. All operations are pure and deterministic —
//! identical inputs always produce identical outputs.
//!
//! The engine performs no I/O and holds no state across calls; filter
//! criteria, sort configuration, and selection sets are values the caller
//! threads through explicitly.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod record;
pub mod view;
pub mod voice;
