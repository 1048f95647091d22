use crate::types::PageId;

/// One page and the pages its outbound links point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: PageId,
    pub targets: Vec<PageId>,
}

impl EdgeRecord {
    pub fn new(source: PageId, targets: Vec<PageId>) -> Self {
        EdgeRecord { source, targets }
    }
}
