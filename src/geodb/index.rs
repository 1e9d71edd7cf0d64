//! Immutable IP-range interval index.
//!
//! A sorted table of disjoint `[start, end]` ranges, each carrying the
//! coordinate text of the range's location. Built once from a dataset pass and
//! never mutated afterwards, so any number of tasks can query it through a
//! shared reference without locking.

/// One IP-range-to-location record.
///
/// Latitude and longitude are kept as the dataset's original text rather than
/// parsed floats, so coordinates are emitted downstream exactly as published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord {
    /// Inclusive lower bound of the range (big-endian address value).
    pub start: u32,
    /// Inclusive upper bound of the range.
    pub end: u32,
    /// Latitude text as published in the dataset.
    pub latitude: String,
    /// Longitude text as published in the dataset.
    pub longitude: String,
}

/// Point-containment index over sorted, disjoint IP ranges.
#[derive(Debug)]
pub struct GeoIndex {
    records: Vec<RangeRecord>,
}

impl GeoIndex {
    /// Builds an index from records already sorted ascending by `start`.
    ///
    /// The dataset guarantees sort order and disjointness; neither is
    /// re-verified here. Passing unsorted records produces wrong lookups, not
    /// panics.
    pub fn from_records(records: Vec<RangeRecord>) -> Self {
        GeoIndex { records }
    }

    /// Looks up the record whose range contains `ip`.
    ///
    /// Floor binary search: find the rightmost record with `start <= ip`, then
    /// check `ip <= end` against that single candidate. An address in the gap
    /// between two ranges, or below the first `start`, has no match.
    pub fn lookup(&self, ip: u32) -> Option<&RangeRecord> {
        let idx = self.records.partition_point(|record| record.start <= ip);
        if idx == 0 {
            return None;
        }
        let candidate = &self.records[idx - 1];
        (ip <= candidate.end).then_some(candidate)
    }

    /// Number of ranges in the index.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no ranges at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
