//! Compaction of integer sets into search-string ranges.

use std::collections::BTreeSet;

/// Groups `values` into ascending runs of consecutive integers.
///
/// `[1, 2, 3, 5, 7, 9, 10]` becomes `["1-3", "5", "7", "9-10"]`. Duplicates
/// and input order are ignored.
pub fn compact_ranges<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = u32>,
{
    let sorted: BTreeSet<u32> = values.into_iter().collect();
    let mut ranges = Vec::new();
    let mut values = sorted.into_iter();

    let Some(mut start) = values.next() else {
        return ranges;
    };
    let mut end = start;

    for value in values {
        if value == end + 1 {
            end = value;
            continue;
        }
        ranges.push(format_run(start, end));
        start = value;
        end = value;
    }
    ranges.push(format_run(start, end));

    ranges
}

fn format_run(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}
