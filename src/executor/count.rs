use crate::{
    data::{EdgeRecord, League},
    types::{LinkCount, PageId, Pair},
};
use itertools::Itertools;
use rayon::prelude::*;

/// Emits one `(target, 1)` contribution per outbound link whose target is a
/// league member. Membership of the source page is irrelevant.
pub fn count_map<'a>(
    record: &'a EdgeRecord,
    league: &'a League,
) -> impl Iterator<Item = Pair<PageId, LinkCount>> + 'a {
    record
        .targets
        .iter()
        .filter(move |&&target| league.contains(target))
        .map(|&target| Pair::new(target, 1))
}

/// Sums the contributions routed to one target key.
pub fn count_reduce<I: IntoIterator<Item = LinkCount>>(values: I) -> LinkCount {
    values.into_iter().sum()
}

/// Stage A driver: counts inbound links per league page.
///
/// Map workers process disjoint record partitions in parallel with no shared
/// mutable state; the shuffle is a sort by target key followed by a per-key
/// reduction. Summation is commutative, so contribution order never matters.
/// League pages with no inbound link do not appear in the output.
pub fn count_links(records: &[EdgeRecord], league: &League) -> Vec<(PageId, LinkCount)> {
    let mut contributions: Vec<_> = records
        .par_iter()
        .flat_map_iter(|record| count_map(record, league))
        .collect();
    contributions.par_sort_unstable();
    let groups = contributions.iter().group_by(|pair| pair.first);
    groups
        .into_iter()
        .map(|(page, group)| (page, count_reduce(group.map(|pair| pair.second))))
        .collect()
}
