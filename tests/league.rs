use popleague::{
    data::{EdgeRecord, League},
    executor::{count_links, rank_league},
    task::{IntermediateType, Task},
};

const EDGES: &str = "1: 2 3\n2: 3\n3: 1 1\n";

fn run(league: League, edges: &str) -> String {
    let mut sink = Vec::new();
    Task::new(league)
        .intermediate_type(IntermediateType::TmpFile)
        .execute(edges.as_bytes(), &mut sink)
        .unwrap();
    String::from_utf8(sink).unwrap()
}

#[test]
fn test_league_ranking() {
    assert_eq!(run(League::new(vec![1, 2, 3]), EDGES), "3\t0\n1\t1\n2\t2\n");
}

#[test]
fn test_league_restriction() {
    // Page 3 receives the most links but is outside the league.
    assert_eq!(run(League::new(vec![1, 2]), EDGES), "1\t0\n2\t1\n");
}

#[test]
fn test_empty_league_overlap() {
    assert_eq!(run(League::new(vec![5]), "1: 2 3\n"), "");
}

#[test]
fn test_rank_ordering_law() {
    let records: Vec<EdgeRecord> = (0..100)
        .map(|source| EdgeRecord::new(source, (0..source % 10).collect()))
        .collect();
    let league = League::new(0..10);
    let counts = count_links(&records, &league);
    let ranks = rank_league(&counts);

    // Dense 0-based ranks with no gaps or duplicates.
    let mut seen: Vec<_> = ranks.iter().map(|&(_, rank)| rank).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..counts.len()).collect::<Vec<_>>());

    // Higher count means smaller rank; on equal counts the larger page id
    // takes the smaller rank.
    let count_of = |page| {
        counts
            .iter()
            .find(|&&(p, _)| p == page)
            .map(|&(_, count)| count)
            .unwrap()
    };
    for &(p1, r1) in &ranks {
        for &(p2, r2) in &ranks {
            if count_of(p1) > count_of(p2) {
                assert!(r1 < r2);
            } else if count_of(p1) == count_of(p2) && p1 > p2 {
                assert!(r1 < r2);
            }
        }
    }
}

#[test]
fn test_counting_idempotent() {
    let records: Vec<EdgeRecord> = (0..1000)
        .map(|source| EdgeRecord::new(source, vec![source % 7, source % 13]))
        .collect();
    let league = League::new(0..13);
    let first = count_links(&records, &league);
    for _ in 0..10 {
        assert_eq!(count_links(&records, &league), first);
    }
}
