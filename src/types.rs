//! Various types related to league ranking.

/// The page id type.
pub type PageId = u32;

/// The inbound link count type.
pub type LinkCount = u64;

/// The dense rank type.
pub type Rank = usize;

/// An ordered pair with the lexicographic total order of its components.
///
/// `Pair<LinkCount, PageId>` is the ordering key of the ranker: counts
/// compare first, page ids break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_order() {
        assert!(Pair::new(1, 9) < Pair::new(2, 0));
        assert!(Pair::new(2, 1) < Pair::new(2, 3));
        assert_eq!(Pair::new(2, 3), Pair::new(2, 3));
    }

    #[test]
    fn test_pair_order_in_set() {
        let pairs: std::collections::BTreeSet<_> = vec![
            Pair::new(2u64, 3u32),
            Pair::new(1, 1),
            Pair::new(1, 2),
            Pair::new(2, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            pairs.into_iter().collect::<Vec<_>>(),
            vec![
                Pair::new(1, 1),
                Pair::new(1, 2),
                Pair::new(2, 1),
                Pair::new(2, 3)
            ]
        );
    }
}
