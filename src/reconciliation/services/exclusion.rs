use std::collections::HashSet;

use crate::reconciliation::domain::{RecordId, UpdateDescriptor};

/// Builds the global exclusion set: the union of every descriptor's
/// supersedes-list.
///
/// The semantics are union-based, not per-descriptor: an identity is
/// excluded when ANY descriptor names it as superseded, regardless of the
/// fields on its own descriptor. Building the set in one dedicated pass,
/// before any filtering, keeps that property explicit.
pub fn build_exclusion_set<'a, I>(descriptors: I) -> HashSet<RecordId>
where
    I: IntoIterator<Item = &'a UpdateDescriptor>,
{
    let mut excluded = HashSet::new();
    for descriptor in descriptors {
        for superseded in &descriptor.supersedes {
            excluded.insert(superseded.clone());
        }
    }
    excluded
}

/// Drops every working entry whose member identity appears in the exclusion
/// set, preserving the enumeration order of the survivors.
pub fn filter_superseded(
    working: Vec<(RecordId, UpdateDescriptor)>,
    excluded: &HashSet<RecordId>,
) -> Vec<(RecordId, UpdateDescriptor)> {
    working
        .into_iter()
        .filter(|(member, _)| !excluded.contains(member))
        .collect()
}
