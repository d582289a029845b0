/// NWIS feed ingestion: retrieval, RDB classification, extraction and merge.
///
/// Each feed gets its own extractor file; `merge` is the only place that
/// knows the order they run in.

pub mod daily_value;
pub mod merge;
pub mod nwis;
pub mod peak_flow;
pub mod rdb;

#[cfg(test)]
pub mod fixtures;
