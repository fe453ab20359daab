//! Visualization export module

use anyhow::Result;
use crate::graph::SocialGraph;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the graph as undirected GraphML.
///
/// People listed in `connectors` get `connector = true`; each friendship is
/// written once.
pub fn write_graphml(
    graph: &SocialGraph,
    connectors: &[u32],
    path: &Path,
) -> Result<()> {
    log::info!("Writing GraphML export to {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut is_connector = vec![false; graph.node_count];
    for &idx in connectors {
        is_connector[idx as usize] = true;
    }

    let mut file = BufWriter::new(File::create(path)?);

    // Write GraphML header
    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"name\" for=\"node\" attr.name=\"name\" attr.type=\"string\"/>")?;
    writeln!(file, "  <key id=\"affiliation\" for=\"node\" attr.name=\"affiliation\" attr.type=\"string\"/>")?;
    writeln!(file, "  <key id=\"connector\" for=\"node\" attr.name=\"connector\" attr.type=\"boolean\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    // Write nodes
    for (node, person) in graph.people.iter().enumerate() {
        writeln!(file, "    <node id=\"n{}\">", node)?;
        writeln!(file, "      <data key=\"name\">{}</data>", escape(&person.name))?;
        if let Some(affiliation) = &person.affiliation {
            writeln!(file, "      <data key=\"affiliation\">{}</data>", escape(affiliation))?;
        }
        writeln!(file, "      <data key=\"connector\">{}</data>", is_connector[node])?;
        writeln!(file, "    </node>")?;
    }

    // Write edges, lower index first
    let mut edge_id = 0;
    for src in 0..graph.node_count {
        for &dst in graph.friends(src) {
            if (dst as usize) > src {
                writeln!(file, "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\"/>",
                         edge_id, src, dst)?;
                edge_id += 1;
            }
        }
    }

    // Write GraphML footer
    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;
    file.flush()?;

    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
