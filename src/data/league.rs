use crate::{
    error::{Err, Result},
    front_end::parse_member,
    types::PageId,
};
use std::{collections::HashSet, io::BufRead, path::Path};

/// The set of pages whose popularity is being ranked.
///
/// Built once before any record is processed and immutable afterwards.
/// Workers running in parallel each hold their own replica, so no
/// synchronization is ever needed around membership lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    members: HashSet<PageId>,
}

impl League {
    pub fn new<I: IntoIterator<Item = PageId>>(members: I) -> Self {
        League {
            members: members.into_iter().collect(),
        }
    }

    /// Reads one page id per line; blank lines are ignored.
    ///
    /// A line that is not a single id fails the whole load, since counting
    /// against a partial league would be meaningless.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut members = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Err::ConfigLoad(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            members.insert(parse_member(&line).map_err(|e| Err::ConfigLoad(e.to_string()))?);
        }
        Ok(League { members })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file =
            std::fs::File::open(path.as_ref()).map_err(|e| Err::ConfigLoad(e.to_string()))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn contains(&self, page: PageId) -> bool {
        self.members.contains(&page)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader() {
        let league = League::from_reader("1\n2\n3\n".as_bytes()).unwrap();
        assert_eq!(league.len(), 3);
        assert!(league.contains(2));
        assert!(!league.contains(4));
    }

    #[test]
    fn test_from_reader_blank_lines() {
        let league = League::from_reader("1\n\n2\n".as_bytes()).unwrap();
        assert_eq!(league.len(), 2);
    }

    #[test]
    fn test_from_reader_malformed() {
        assert!(League::from_reader("1\nx\n".as_bytes()).is_err());
    }
}
