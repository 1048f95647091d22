use crate::{
    data::{EdgeRecord, League},
    error::{Err, Result},
    executor::{count_links, rank_league},
    front_end::{parse_count, parse_edge},
    types::{LinkCount, PageId},
};
use log::{info, warn};
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};

/// Where the Stage A -> Stage B dataset lives.
pub enum IntermediateType {
    /// An in-memory text buffer.
    Mem,
    /// An unlinked scratch file, removed automatically when dropped.
    TmpFile,
}

/// What to do with an edge or count record that fails to parse.
pub enum ParseErrorPolicy {
    /// Log a warning and keep going. The default.
    Skip,
    /// Fail the stage on the first malformed record.
    Abort,
}

/// A ranking run over one edge stream and one league.
///
/// The league is loaded before `execute` and immutable afterwards; both
/// stages receive their input as injected streams and write to injected
/// sinks, so the aggregation logic itself never touches the file system.
pub struct Task {
    league: League,
    intermediate_type: IntermediateType,
    parse_error_policy: ParseErrorPolicy,
}

impl Task {
    pub fn new(league: League) -> Self {
        Task {
            league,
            intermediate_type: IntermediateType::Mem,
            parse_error_policy: ParseErrorPolicy::Skip,
        }
    }

    pub fn intermediate_type(mut self, intermediate_type: IntermediateType) -> Self {
        self.intermediate_type = intermediate_type;
        self
    }

    pub fn parse_error_policy(mut self, parse_error_policy: ParseErrorPolicy) -> Self {
        self.parse_error_policy = parse_error_policy;
        self
    }

    /// Runs both stages, writing `"<page>\t<rank>"` lines to `sink`.
    ///
    /// Stage A's `"<page>\t<count>"` lines go through the configured
    /// intermediate dataset and are parsed back as Stage B's input. The
    /// sink is only written once ranking has completed, so an aborted run
    /// commits no partial output.
    pub fn execute<R: BufRead, W: Write>(&self, edges: R, sink: &mut W) -> Result<()> {
        info!("counting links...");
        let records = self.read_edges(edges)?;
        let counts = count_links(&records, &self.league);
        info!("shuffling {} counts...", counts.len());
        let counts = match self.intermediate_type {
            IntermediateType::Mem => {
                let mut buffer = Vec::new();
                write_counts(&mut buffer, &counts)?;
                self.read_counts(buffer.as_slice())?
            }
            IntermediateType::TmpFile => {
                let mut file = tempfile::tempfile()?;
                write_counts(&mut file, &counts)?;
                file.seek(SeekFrom::Start(0))?;
                self.read_counts(BufReader::new(file))?
            }
        };
        info!("ranking...");
        let ranks = rank_league(&counts);
        info!("writing {} ranked pages...", ranks.len());
        for (page, rank) in ranks {
            writeln!(sink, "{}\t{}", page, rank)?;
        }
        Ok(())
    }

    fn read_edges<R: BufRead>(&self, reader: R) -> Result<Vec<EdgeRecord>> {
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_edge(&line) {
                Ok(record) => records.push(record),
                Err(e) => self.handle_parse_error(e)?,
            }
        }
        Ok(records)
    }

    fn read_counts<R: BufRead>(&self, reader: R) -> Result<Vec<(PageId, LinkCount)>> {
        let mut counts = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_count(&line) {
                Ok(count) => counts.push(count),
                Err(e) => self.handle_parse_error(e)?,
            }
        }
        Ok(counts)
    }

    fn handle_parse_error<R: pest::RuleType>(&self, e: pest::error::Error<R>) -> Result<()> {
        match self.parse_error_policy {
            ParseErrorPolicy::Skip => {
                warn!("skipping malformed record: {}", e);
                Ok(())
            }
            ParseErrorPolicy::Abort => Err(Err::RecordParse(e.to_string())),
        }
    }
}

fn write_counts<W: Write>(sink: &mut W, counts: &[(PageId, LinkCount)]) -> Result<()> {
    for &(page, count) in counts {
        writeln!(sink, "{}\t{}", page, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGES: &str = "1: 2 3\n2: 3\n3: 1 1\n";

    fn execute(task: &Task, edges: &str) -> String {
        let mut sink = Vec::new();
        task.execute(edges.as_bytes(), &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_execute_mem() {
        let task = Task::new(League::new(vec![1, 2, 3]));
        assert_eq!(execute(&task, EDGES), "3\t0\n1\t1\n2\t2\n");
    }

    #[test]
    fn test_execute_tmpfile() {
        let task =
            Task::new(League::new(vec![1, 2, 3])).intermediate_type(IntermediateType::TmpFile);
        assert_eq!(execute(&task, EDGES), "3\t0\n1\t1\n2\t2\n");
    }

    #[test]
    fn test_execute_empty_overlap() {
        let task = Task::new(League::new(vec![5]));
        assert_eq!(execute(&task, "1: 2 3\n"), "");
    }

    #[test]
    fn test_execute_skips_malformed_by_default() {
        let task = Task::new(League::new(vec![2]));
        assert_eq!(execute(&task, "1: 2\nbogus line\n3: 2\n"), "2\t0\n");
    }

    #[test]
    fn test_execute_abort_on_malformed() {
        let task = Task::new(League::new(vec![2])).parse_error_policy(ParseErrorPolicy::Abort);
        let mut sink = Vec::new();
        let result = task.execute("1: 2\nbogus line\n".as_bytes(), &mut sink);
        assert!(matches!(result, Err(Err::RecordParse(_))));
        assert!(sink.is_empty());
    }
}
