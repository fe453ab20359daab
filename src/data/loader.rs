//! Friendship file loading
//!
//! The input format is line based:
//!
//! ```text
//! 4
//! sam|y|rutgers
//! jane|y|rutgers
//! bob|n
//! kaitlin|y|
//! sam|jane
//! jane|bob
//! ```
//!
//! The first line holds the number of people, followed by one line per
//! person (`name|y|affiliation` or `name|n`), then one friendship per line
//! until the end of the input. Names and affiliations are trimmed and
//! lower-cased; blank lines are ignored.

use crate::error::{GraphError, GraphResult};
use crate::graph::{GraphBuilder, SocialGraph};
use std::path::Path;

/// Load a friendship file from disk
pub fn load_graph(path: impl AsRef<Path>) -> GraphResult<SocialGraph> {
    let path = path.as_ref();
    log::info!("Reading friendship file: {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let graph = parse_graph(&contents)?;

    log::info!(
        "Loaded graph with {} people and {} friendships ({} bytes in memory)",
        graph.node_count,
        graph.edge_count(),
        graph.memory_usage()
    );

    Ok(graph)
}

/// Parse the friendship text format
pub fn parse_graph(input: &str) -> GraphResult<SocialGraph> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines.next().ok_or(GraphError::InvalidCount {
        line: 1,
        found: String::new(),
    })?;
    let expected: usize = count_text.parse().map_err(|_| GraphError::InvalidCount {
        line: count_line,
        found: count_text.to_string(),
    })?;

    let mut builder = GraphBuilder::with_capacity(expected);

    while builder.person_count() < expected {
        let (line_no, line) = lines.next().ok_or(GraphError::MissingPeople {
            expected,
            found: builder.person_count(),
        })?;
        let (name, affiliation) = parse_person(line_no, line)?;
        builder
            .add_person(&name, affiliation)
            .map_err(|e| e.at_line(line_no))?;
    }

    let mut repeated = 0;
    for (line_no, line) in lines {
        let (a, b) = parse_friendship(line_no, line)?;
        let added = builder
            .add_friendship(&a, &b)
            .map_err(|e| e.at_line(line_no))?;
        if !added {
            repeated += 1;
        }
    }

    if repeated > 0 {
        log::warn!("Skipped {} repeated friendship lines", repeated);
    }

    builder.build()
}

fn normalize(field: &str) -> String {
    field.trim().to_lowercase()
}

fn parse_person(line_no: usize, line: &str) -> GraphResult<(String, Option<String>)> {
    let malformed = || GraphError::MalformedPerson {
        line: line_no,
        entry: line.to_string(),
    };

    let mut fields = line.split('|');
    let name = fields.next().map(normalize).filter(|n| !n.is_empty()).ok_or_else(malformed)?;
    let flag = fields.next().map(normalize).ok_or_else(malformed)?;

    let affiliation = match flag.as_str() {
        "y" => fields.next().map(normalize).filter(|a| !a.is_empty()),
        "n" => None,
        _ => return Err(malformed()),
    };

    Ok((name, affiliation))
}

fn parse_friendship(line_no: usize, line: &str) -> GraphResult<(String, String)> {
    split_pair(line)
        .map(|(a, b)| (normalize(a), normalize(b)))
        .ok_or_else(|| GraphError::MalformedFriendship {
            line: line_no,
            entry: line.to_string(),
        })
}

/// Split `a|b` into two non-empty trimmed fields; anything else is `None`
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('|').map(str::trim);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Some((a, b)),
        _ => None,
    }
}

/// Parse chain queries, one `from|to` pair per line.
///
/// Blank lines are skipped. Names are lower-cased when `lowercase` is set,
/// matching the friendship file normalization.
pub fn parse_chain_queries(input: &str, lowercase: bool) -> GraphResult<Vec<(String, String)>> {
    let key = |field: &str| if lowercase { field.to_lowercase() } else { field.to_string() };

    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            split_pair(line)
                .map(|(from, to)| (key(from), key(to)))
                .ok_or_else(|| GraphError::MalformedQuery {
                    line: line_no,
                    entry: line.to_string(),
                })
        })
        .collect()
}
