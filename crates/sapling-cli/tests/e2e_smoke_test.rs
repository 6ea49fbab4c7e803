use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use sapling_cli::{Args, CliError, run};

/// Samples live at the workspace root, not in the crate
fn samples_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../samples")
}

/// Collects all .tree files from a directory
fn collect_tree_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("tree")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        offset_x: 0.0,
        offset_y: 0.0,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_tree_files(samples_dir());
    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_path = temp_dir.path().join(format!(
            "{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(sample_path, &output_path)) {
            Ok(()) => {
                let output = fs::read_to_string(&output_path).expect("Output should exist");
                let source = fs::read_to_string(sample_path).unwrap();
                let entries = source
                    .lines()
                    .filter(|line| {
                        let line = line.trim();
                        !line.is_empty() && !line.starts_with('#')
                    })
                    .count();
                assert!(output.starts_with("# bounds\t"));
                assert_eq!(
                    output.lines().count(),
                    entries + 1,
                    "{} should list every entry",
                    sample_path.display()
                );
            }
            Err(err) => failed_samples.push((sample_path.clone(), err)),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_tree_files(samples_dir().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    for sample_path in &error_samples {
        let output_path = temp_dir.path().join("unused.txt");
        let result = run(&args_for(sample_path, &output_path));
        assert!(
            matches!(result, Err(CliError::Outline { .. })),
            "{} should fail with an outline error, got {:?}",
            sample_path.display(),
            result
        );
        assert!(!output_path.exists());
    }
}

#[test]
fn e2e_config_file_changes_layout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[layout]\nlevel_separation = 10.0\n").unwrap();

    let output_path = temp_dir.path().join("chains.txt");
    let mut args = args_for(&samples_dir().join("chains.tree"), &output_path);
    args.config = Some(config_path.to_string_lossy().to_string());
    args.offset_x = 100.0;
    run(&args).expect("Layout should succeed");

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(output.contains("root\t100.000\t0.000"));
    assert!(output.contains("a5\t99.250\t50.000"));
    assert!(output.contains("b2\t100.750\t20.000"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("missing.tree"),
        &temp_dir.path().join("out.txt"),
    );
    assert!(matches!(run(&args), Err(CliError::Io(_))));
}
