// tests/integration/end_to_end.rs
use std::{fs, path::Path};

use git_chunks::{bootstrap::run_with_config, cli::OutputFormat, config::AppConfig};
use git_chunks_shared_kernel::ChunkLimit;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{git_available, TempRepo};

fn json_config(root: &Path, limit_bytes: u64, output: &Path) -> AppConfig {
    AppConfig {
        root: root.to_path_buf(),
        limit: ChunkLimit::new(limit_bytes).expect("positive limit"),
        format: OutputFormat::Json,
        output: Some(output.to_path_buf()),
        jobs: 1,
    }
}

fn read_json(path: &Path) -> Value {
    let contents = fs::read_to_string(path).expect("output exists");
    serde_json::from_str(&contents).expect("valid JSON")
}

#[test]
fn end_to_end_packs_untracked_files_into_bounded_chunks() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let repo = TempRepo::init("end_to_end");
    repo.write_untracked("a.bin", 4);
    repo.write_untracked("b.bin", 4);
    repo.write_untracked("c.bin", 4);
    repo.write_untracked("d.bin", 1);

    let output = repo.path().join("report.json");
    run_with_config(json_config(repo.path(), 10, &output)).expect("run succeeds");

    let json = read_json(&output);

    let chunks = json["chunks"].as_array().expect("chunks array");
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0]["total_bytes"].as_u64(), Some(8));
    assert_eq!(chunks[1]["total_bytes"].as_u64(), Some(5));

    let stats = &json["stats"];
    assert_eq!(stats["total_candidates"].as_u64(), Some(4));
    assert_eq!(stats["processed_count"].as_u64(), Some(4));
    assert_eq!(stats["chunk_count"].as_u64(), Some(2));
}

#[test]
fn end_to_end_reports_oversized_files_without_packing_them() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let repo = TempRepo::init("oversized");
    repo.write_untracked("huge.bin", 11);
    repo.write_untracked("small.bin", 2);

    let output = repo.path().join("report.json");
    run_with_config(json_config(repo.path(), 10, &output)).expect("run succeeds");

    let json = read_json(&output);

    assert_eq!(json["stats"]["oversized_count"].as_u64(), Some(1));
    assert_eq!(json["stats"]["total_processable_bytes"].as_u64(), Some(2));
    assert_eq!(json["oversized"][0]["path"].as_str().map(Path::new).and_then(Path::file_name), Some("huge.bin".as_ref()));

    let packed: Vec<_> = json["chunks"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["files"].as_array().unwrap().iter())
        .map(|f| f["path"].as_str().unwrap().to_string())
        .collect();
    assert!(packed.iter().all(|p| !p.ends_with("huge.bin")));
}

#[test]
fn end_to_end_empty_repository_yields_zero_chunks() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let repo = TempRepo::init("empty");
    let output = repo.path().join("report.json");
    run_with_config(json_config(repo.path(), 10, &output)).expect("run succeeds");

    let json = read_json(&output);
    assert_eq!(json["chunks"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["stats"]["total_candidates"].as_u64(), Some(0));
}

#[cfg(unix)]
#[test]
fn end_to_end_surfaces_dangling_symlinks_as_unmeasurable() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let repo = TempRepo::init("dangling");
    repo.write_untracked("kept.bin", 2);
    std::os::unix::fs::symlink(repo.path().join("missing"), repo.path().join("broken"))
        .expect("symlink created");

    let output = repo.path().join("report.json");
    run_with_config(json_config(repo.path(), 10, &output)).expect("run succeeds");

    let json = read_json(&output);
    assert_eq!(json["stats"]["total_candidates"].as_u64(), Some(2));
    assert_eq!(json["stats"]["unmeasurable_count"].as_u64(), Some(1));
    let unmeasurable = json["unmeasurable"].as_array().expect("unmeasurable array");
    assert_eq!(unmeasurable.len(), 1);
    assert!(unmeasurable[0]["path"].as_str().unwrap().ends_with("broken"));
}

#[test]
fn end_to_end_is_deterministic_across_runs() {
    if !git_available() {
        eprintln!("skipping: git not available");
        return;
    }

    let repo = TempRepo::init("deterministic");
    for i in 0..12 {
        repo.write_untracked(&format!("file_{i:02}.bin"), 3 + i % 5);
    }

    // Reports go outside the repo so the second run sees the same untracked set.
    let out_dir = common::TempDir::new("deterministic_out", "git_chunks_integration");
    let first = out_dir.path().join("first.json");
    let second = out_dir.path().join("second.json");
    run_with_config(json_config(repo.path(), 10, &first)).expect("first run succeeds");
    run_with_config(json_config(repo.path(), 10, &second)).expect("second run succeeds");

    let mut a = read_json(&first);
    let mut b = read_json(&second);
    // Timestamps differ between runs; nothing else may.
    a["generated_at"] = Value::Null;
    b["generated_at"] = Value::Null;
    assert_eq!(a, b);
}
