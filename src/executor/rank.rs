use crate::types::{LinkCount, PageId, Pair, Rank};
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Stage B local sort: orders one worker's counts into an ascending run.
pub fn rank_map(counts: &[(PageId, LinkCount)]) -> Vec<Pair<LinkCount, PageId>> {
    counts
        .iter()
        .map(|&(page, count)| Pair::new(count, page))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Stage B collector: merges the sorted runs and assigns dense ranks.
///
/// Runs on exactly one worker; global rank is a total-order operation. The
/// k-way merge yields pairs ascending by `(count, page id)` and ranks are
/// handed out walking the merged sequence backwards, so the highest count
/// gets rank 0 and, among equal counts, the larger page id gets the smaller
/// rank.
pub fn rank_reduce(runs: Vec<Vec<Pair<LinkCount, PageId>>>) -> Vec<(PageId, Rank)> {
    let merged: Vec<_> = runs.into_iter().kmerge().collect();
    merged
        .into_iter()
        .rev()
        .enumerate()
        .map(|(rank, pair)| (pair.second, rank))
        .collect()
}

/// Stage B driver: sorts disjoint partitions in parallel and funnels the
/// runs into the single collector.
pub fn rank_league(counts: &[(PageId, LinkCount)]) -> Vec<(PageId, Rank)> {
    let runs = counts
        .par_chunks(partition_len(counts.len()))
        .map(rank_map)
        .collect();
    rank_reduce(runs)
}

fn partition_len(len: usize) -> usize {
    (len / rayon::current_num_threads()).max(1)
}
