use super::error::Result;
use crate::{
    data::EdgeRecord,
    types::{LinkCount, PageId},
};
use pest::Parser;
use pest_derive::Parser;

pub type RecordRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct RecordParser;

/// Parses an edge record line `"<source>: <target> <target> ..."`.
///
/// An edge record may list no targets at all, and may list the same target
/// more than once.
pub fn parse_edge(line: &str) -> Result<EdgeRecord> {
    let mut ids = RecordParser::parse(Rule::edge_record, line)?
        .next()
        .unwrap()
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::id);
    let source = parse_id(ids.next().unwrap())?;
    let targets = ids.map(parse_id).collect::<Result<_>>()?;
    Ok(EdgeRecord::new(source, targets))
}

/// Parses a count record line `"<page>\t<count>"`.
pub fn parse_count(line: &str) -> Result<(PageId, LinkCount)> {
    let mut ids = RecordParser::parse(Rule::count_record, line)?
        .next()
        .unwrap()
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::id);
    let page = parse_id(ids.next().unwrap())?;
    let count = parse_num(ids.next().unwrap())?;
    Ok((page, count))
}

/// Parses a league-membership line holding a single page id.
pub fn parse_member(line: &str) -> Result<PageId> {
    parse_id(
        RecordParser::parse(Rule::member_record, line)?
            .next()
            .unwrap()
            .into_inner()
            .find(|pair| pair.as_rule() == Rule::id)
            .unwrap(),
    )
}

fn parse_id(pair: pest::iterators::Pair<Rule>) -> Result<PageId> {
    pair.as_str()
        .parse()
        .map_err(|_| out_of_range_error(&pair))
}

fn parse_num(pair: pest::iterators::Pair<Rule>) -> Result<LinkCount> {
    pair.as_str()
        .parse()
        .map_err(|_| out_of_range_error(&pair))
}

fn out_of_range_error(pair: &pest::iterators::Pair<Rule>) -> pest::error::Error<RecordRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: String::from("id out of range"),
        },
        pair.as_span(),
    )
}
