//! Graph printing and visualization export

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use crate::error::{CpmError, Result};
use crate::graph::Graph;
use crate::percolation::Percolation;

/// Write every node label followed by its neighbor labels, one node per line
pub fn write_graph<W: Write>(out: &mut W, graph: &Graph) -> io::Result<()> {
    if graph.is_empty() {
        writeln!(out, "empty graph")?;
        return Ok(());
    }

    for (_, node) in graph.iter() {
        write!(out, "{}:  ", node.label())?;
        for &neighbor in node.neighbors() {
            write!(out, "{} ", graph.label(neighbor))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Render a graph in the [`write_graph`] layout
pub fn render_graph(graph: &Graph) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_graph(&mut out, graph);
    String::from_utf8_lossy(&out).into_owned()
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Write `graph` as undirected GraphML, one edge per linked pair
pub fn write_graphml<W: Write>(out: &mut W, graph: &Graph) -> io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(out, "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>")?;
    writeln!(out, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for (id, node) in graph.iter() {
        writeln!(
            out,
            "    <node id=\"{}\">\n      <data key=\"label\">{}</data>\n    </node>",
            id,
            escape_xml(node.label())
        )?;
    }

    let mut edge_id = 0;
    for src in graph.node_ids() {
        for &dst in graph.neighbors(src) {
            // Reverse direction of an undirected link is written by the lower id
            if src > dst && graph.is_connected(dst, src) {
                continue;
            }
            writeln!(
                out,
                "    <edge id=\"e{}\" source=\"{}\" target=\"{}\"/>",
                edge_id, src, dst
            )?;
            edge_id += 1;
        }
    }

    writeln!(out, "  </graph>")?;
    writeln!(out, "</graphml>")?;

    Ok(())
}

/// Write the community graph and community membership files into `output_dir`
pub fn generate_visualizations(
    original: &Graph,
    percolation: &Percolation,
    output_dir: &Path,
) -> Result<()> {
    log::info!("Generating visualization files in {}", output_dir.display());

    fs::create_dir_all(output_dir).map_err(|err| CpmError::io(output_dir, err))?;

    let graphml_path = output_dir.join("community_graph.graphml");
    let file = File::create(&graphml_path).map_err(|err| CpmError::io(&graphml_path, err))?;
    let mut writer = BufWriter::new(file);
    write_graphml(&mut writer, &percolation.community_graph)
        .and_then(|_| writer.flush())
        .map_err(|err| CpmError::io(&graphml_path, err))?;

    let csv_path = output_dir.join("nodes.csv");
    write_membership_csv(original, percolation, &csv_path)
        .map_err(|err| CpmError::io(&csv_path, err))?;

    Ok(())
}

/// Write `label,community_id` rows for every community member
fn write_membership_csv(original: &Graph, percolation: &Percolation, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "id,label,community_id")?;
    for community in &percolation.communities {
        for &node in &community.members {
            writeln!(file, "{},{},{}", node.0, original.label(node), community.id)?;
        }
    }

    file.flush()
}
