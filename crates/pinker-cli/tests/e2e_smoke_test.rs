use std::{fs, path::PathBuf};

use tempfile::tempdir;

use pinker::PinkerError;
use pinker_cli::{Args, EXIT_FAILURE, EXIT_REJECTED, exit_code, run};

/// Collects all .pinker files from a directory
fn collect_pinker_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("pinker")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, next to the crates directory.
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn strict_args(input: &PathBuf, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
        strict: true,
        decode_html: false,
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_pinker_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        // Valid demos must not raise a single error diagnostic.
        let args = strict_args(demo_path, output_path.clone());

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("SVG should be written");
                assert!(svg.contains("<svg"), "{} is not an SVG", output_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_pinker_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = strict_args(demo_path, output_path.clone());

        match run(&args) {
            Err(err @ PinkerError::Diagnostics { .. }) => {
                assert!(!output_path.exists(), "Strict failures must not write output");
                assert_eq!(exit_code(&err), EXIT_REJECTED);
            }
            _ => unexpectedly_succeeded.push(demo_path.clone()),
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that didn't fail with diagnostics:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_error_demos_render_without_strict() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for demo_path in collect_pinker_files(demos_path().join("errors")) {
        let output_path = temp_dir.path().join("lenient.svg");
        let args = Args {
            strict: false,
            ..strict_args(&demo_path, output_path.clone())
        };

        run(&args).unwrap_or_else(|e| panic!("{} failed: {e}", demo_path.display()));
        assert!(output_path.exists());
    }
}

#[test]
fn e2e_decode_html_restores_arrow_tokens() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("escaped.pinker");
    fs::write(&input_path, "layout:\n[A] [B]\nrelate:\n[A] -&gt; [B]\n").unwrap();

    let plain_output = temp_dir.path().join("plain.svg");
    run(&strict_args(&input_path, plain_output.clone())).unwrap();
    let plain = fs::read_to_string(&plain_output).unwrap();
    // `-&gt;` is not an arrow token: the connector has no head.
    assert!(!plain.contains("<polygon"));

    let decoded_output = temp_dir.path().join("decoded.svg");
    let args = Args {
        decode_html: true,
        ..strict_args(&input_path, decoded_output.clone())
    };
    run(&args).unwrap();
    let decoded = fs::read_to_string(&decoded_output).unwrap();
    assert!(decoded.contains("<polygon"));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("absent.pinker");

    let err = run(&strict_args(&input_path, temp_dir.path().join("out.svg"))).unwrap_err();

    assert!(matches!(err, PinkerError::Io(_)));
    assert_eq!(exit_code(&err), EXIT_FAILURE);
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("styled.pinker");
    fs::write(&input_path, "layout:\n[A]\n").unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nline_color = \"not-a-color\"\n").unwrap();

    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        ..strict_args(&input_path, temp_dir.path().join("out.svg"))
    };

    let err = run(&args).unwrap_err();
    assert!(matches!(err, PinkerError::Config(_)));
    assert_eq!(exit_code(&err), EXIT_FAILURE);
}
