//! End-to-end analysis over loaded friendship files

use friend_graph_analyzer::cluster::{cliques, connectors, find_cliques};
use friend_graph_analyzer::data::{parse_chain_queries, parse_graph, preprocessing::exclude_people};
use friend_graph_analyzer::graph::algorithms::{shortest_chain, shortest_chains};
use std::collections::BTreeSet;

const CAMPUS: &str = "\
15
sam|y|rutgers
jane|y|rutgers
michele|y|cornell
sergei|y|rutgers
ricardo|y|rutgers
kaitlin|n
samir|n
aparna|y|rutgers
ming|y|penn state
nick|y|rutgers
bob|y|rutgers
heather|y|penn state
rachel|n
rajeev|y|penn state
vera|y|rutgers
sam|jane
jane|bob
jane|kaitlin
kaitlin|nick
bob|ricardo
ricardo|nick
samir|aparna
aparna|ming
ming|sergei
sergei|aparna
heather|rachel
rachel|rajeev
michele|rachel
vera|rachel
";

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[test]
fn path_example() {
    let graph = parse_graph("4\na|y|x\nb|y|x\nc|y|y\nd|y|x\na|b\nb|c\nc|d\n").unwrap();

    assert_eq!(shortest_chain(&graph, "a", "d").unwrap(), vec!["a", "b", "c", "d"]);
    assert_eq!(connectors(&graph).unwrap(), vec!["b", "c"]);

    let groups = cliques(&graph, "x").unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].iter().cloned().collect::<BTreeSet<_>>(), names(&["a", "b", "d"]));
}

#[test]
fn campus_chains() {
    let graph = parse_graph(CAMPUS).unwrap();

    assert_eq!(
        shortest_chain(&graph, "sam", "nick").unwrap(),
        vec!["sam", "jane", "kaitlin", "nick"]
    );
    assert_eq!(shortest_chain(&graph, "Sam", "nick"), None);
    assert_eq!(shortest_chain(&graph, "sam", "aparna"), None);
    assert_eq!(
        shortest_chain(&graph, "samir", "sergei").unwrap(),
        vec!["samir", "aparna", "sergei"]
    );
}

#[test]
fn campus_cliques() {
    let graph = parse_graph(CAMPUS).unwrap();

    let rutgers: BTreeSet<BTreeSet<String>> = cliques(&graph, "rutgers")
        .unwrap()
        .into_iter()
        .map(|g| g.into_iter().collect())
        .collect();
    assert_eq!(
        rutgers,
        BTreeSet::from([
            names(&["sam", "jane", "bob", "ricardo", "nick"]),
            names(&["aparna", "sergei"]),
            names(&["vera"]),
        ])
    );

    let penn_state = find_cliques(&graph, "penn state").unwrap();
    assert_eq!(penn_state.len(), 2);
    assert_eq!(penn_state[0].size, 2);

    assert!(cliques(&graph, "princeton").is_none());
}

#[test]
fn campus_connectors() {
    let graph = parse_graph(CAMPUS).unwrap();

    let found: BTreeSet<String> = connectors(&graph).unwrap().into_iter().collect();
    assert_eq!(
        found,
        names(&["jane", "aparna", "rachel"])
    );
}

#[test]
fn excluding_a_connector_breaks_chains() {
    let graph = parse_graph(CAMPUS).unwrap();
    let without_jane = exclude_people(&graph, &["jane".to_string()]).unwrap();

    assert_eq!(shortest_chain(&without_jane, "sam", "nick"), None);
    assert_eq!(
        shortest_chain(&without_jane, "bob", "nick").unwrap(),
        vec!["bob", "ricardo", "nick"]
    );
}

#[test]
fn batch_chain_queries_from_text() {
    let graph = parse_graph(CAMPUS).unwrap();
    let pairs = parse_chain_queries("Sam|Nick\nsam|aparna\nvera|heather\n", true).unwrap();

    let chains = shortest_chains(&graph, &pairs);
    assert_eq!(chains.len(), 3);
    assert_eq!(chains[0].as_deref().unwrap(), ["sam", "jane", "kaitlin", "nick"]);
    assert!(chains[1].is_none());
    assert_eq!(chains[2].as_deref().unwrap(), ["vera", "rachel", "heather"]);

    assert!(parse_chain_queries("sam|jane|bob\n", true).is_err());
}
