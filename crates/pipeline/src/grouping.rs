//! Grouping of selected records by (department, role).

use crate::summary::{GroupAccumulator, SummaryRow};
use dataset::CandidateRecord;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Composite grouping key borrowed from the first record of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey<'a> {
    pub department: &'a str,
    pub role: &'a str,
}

impl<'a> GroupKey<'a> {
    pub fn of(record: &'a CandidateRecord) -> Self {
        Self {
            department: &record.department,
            role: &record.role,
        }
    }
}

/// Partition records into groups, in order of first appearance
pub fn group_records<'a>(
    records: &[&'a CandidateRecord],
) -> IndexMap<GroupKey<'a>, GroupAccumulator<'a>> {
    let mut groups: IndexMap<GroupKey<'a>, GroupAccumulator<'a>> = IndexMap::new();
    for &record in records {
        match groups.entry(GroupKey::of(record)) {
            Entry::Occupied(mut group) => group.get_mut().add(record),
            Entry::Vacant(slot) => {
                slot.insert(GroupAccumulator::new(record));
            }
        }
    }
    groups
}

/// Group and aggregate in one pass, keeping discovery order
pub fn aggregate(records: &[&CandidateRecord]) -> Vec<SummaryRow> {
    group_records(records)
        .into_values()
        .map(GroupAccumulator::finish)
        .collect()
}
