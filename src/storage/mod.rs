//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty, Value};
use crate::error::{CpmError, Result};
use crate::graph::{Graph, NodeId};
use crate::percolation::Percolation;

/// Save percolation results to the specified directory
pub fn save_results(original: &Graph, percolation: &Percolation, output_dir: &Path) -> Result<()> {
    log::info!(
        "Saving {} cliques and {} communities to {}",
        percolation.cliques.len(),
        percolation.communities.len(),
        output_dir.display()
    );

    // Ensure output directory exists
    fs::create_dir_all(output_dir).map_err(|err| CpmError::io(output_dir, err))?;

    write_json(&output_dir.join("summary.json"), &summary(original, percolation))?;
    write_json(&output_dir.join("cliques.json"), &cliques(original, percolation))?;
    write_json(&output_dir.join("communities.json"), &communities(original, percolation))?;

    log::info!("Results saved successfully");

    Ok(())
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut file = File::create(path).map_err(|err| CpmError::io(path, err))?;
    file.write_all(to_string_pretty(value)?.as_bytes())
        .map_err(|err| CpmError::io(path, err))
}

/// Summary information about the run
pub fn summary(original: &Graph, percolation: &Percolation) -> Value {
    let community_graph = &percolation.community_graph;

    json!({
        "k": percolation.k,
        "graph_stats": {
            "node_count": original.node_count(),
            "edge_count": original.edge_count() / 2,
        },
        "clique_count": percolation.cliques.len(),
        "community_graph_stats": {
            "node_count": community_graph.node_count(),
            "edge_count": community_graph.edge_count() / 2,
        },
        "community_stats": {
            "community_count": percolation.communities.len(),
            "largest_community_size": percolation.communities.first().map_or(0, |c| c.size),
            "smallest_community_size": percolation.communities.last().map_or(0, |c| c.size),
        }
    })
}

/// Member labels of every clique, in discovery order
pub fn cliques(original: &Graph, percolation: &Percolation) -> Value {
    json!({
        "k": percolation.k,
        "cliques": percolation.cliques.iter()
            .map(|clique| clique.labels(original))
            .collect::<Vec<_>>(),
    })
}

fn resolve_labels<'g>(graph: &'g Graph, ids: &[NodeId]) -> Vec<&'g str> {
    ids.iter().map(|&id| graph.label(id)).collect()
}

/// Every community with labels resolved
pub fn communities(original: &Graph, percolation: &Percolation) -> Value {
    json!({
        "communities": percolation.communities.iter().map(|community| {
            json!({
                "id": community.id,
                "size": community.size,
                "density": community.density,
                "members": resolve_labels(original, &community.members),
                "central_nodes": resolve_labels(original, &community.central_nodes),
                "cliques": community.cliques.iter()
                    .map(|&node| percolation.community_graph.label(node))
                    .collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>()
    })
}
