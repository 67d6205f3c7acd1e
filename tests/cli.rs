use std::path::PathBuf;
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clique-percolation"))
}

fn model_graph_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/model_graph.txt")
}

#[test]
fn missing_graph_file_argument_is_a_usage_error() {
    let output = binary().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<GRAPH>"), "stderr: {}", stderr);
}

#[test]
fn prints_graphs_and_communities() {
    let output = binary()
        .arg("-k")
        .arg("4")
        .arg(model_graph_path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("k= 4\nThe original graph\n"));
    assert!(stdout.contains("v1:  v2 v3 \n"));
    assert!(stdout.contains("Community graph:\n"));
    assert!(stdout.contains("0: v4 v5 v6 v7 (cliques: 1"));
}

#[test]
fn rejects_k_below_two() {
    let output = binary()
        .arg("-k")
        .arg("1")
        .arg(model_graph_path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("k must be at least 2"));
}

#[test]
fn writes_results_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .arg(model_graph_path())
        .arg("--output-dir")
        .arg(dir.path())
        .arg("--sequential")
        .output()
        .unwrap();
    assert!(output.status.success());

    for name in [
        "summary.json",
        "cliques.json",
        "communities.json",
        "community_graph.graphml",
        "nodes.csv",
    ] {
        assert!(dir.path().join(name).exists(), "missing {}", name);
    }
}

#[test]
fn undeclared_neighbor_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "v1: v2\nv2: v1 v3\n").unwrap();

    let output = binary().arg(&path).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("v3"));
}
