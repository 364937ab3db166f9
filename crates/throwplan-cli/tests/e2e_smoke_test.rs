use std::{fs, path::Path};

use tempfile::tempdir;

use throwplan_cli::{Args, run};

fn args_for(output_dir: &Path, distance: Option<i64>, series: Option<&str>) -> Args {
    Args {
        surface_width: 31.0,
        surface_height: 16.0,
        throw_ratio: 0.8,
        distance,
        distance_series: series.map(str::to_string),
        aspect_ratio: "16:10".to_string(),
        output_dir: output_dir.to_path_buf(),
        config: None,
        log_level: "off".to_string(),
    }
}

fn png_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[test]
fn e2e_single_distance() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    run(&args_for(&out, Some(20), None)).expect("run succeeds");

    assert_eq!(png_names(&out), vec!["20ft.png"]);
    assert!(fs::metadata(out.join("20ft.png")).unwrap().len() > 0);
}

#[test]
fn e2e_distance_series() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    run(&args_for(&out, None, Some("18-20"))).expect("run succeeds");

    assert_eq!(png_names(&out), vec!["18ft.png", "19ft.png", "20ft.png"]);
}

#[test]
fn e2e_both_distance_flags_fail_with_nothing_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let err = run(&args_for(&out, Some(20), Some("18-20"))).unwrap_err();
    assert!(err.to_string().contains("mutually exclusive"));
    assert!(!out.exists(), "no output directory should be created");
}

#[test]
fn e2e_neither_distance_flag_fails_with_nothing_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let err = run(&args_for(&out, None, None)).unwrap_err();
    assert!(err.to_string().contains("required"));
    assert!(!out.exists());
}

#[test]
fn e2e_malformed_aspect_ratio_fails_with_nothing_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let mut args = args_for(&out, Some(20), None);
    args.aspect_ratio = "16/9".to_string();

    let err = run(&args).unwrap_err();
    assert!(err.to_string().contains("16/9"));
    assert!(!out.exists());
}

#[test]
fn e2e_reversed_series_fails_with_nothing_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let err = run(&args_for(&out, None, Some("8-5"))).unwrap_err();
    assert!(err.to_string().contains("8"));
    assert!(!out.exists());
}

#[test]
fn e2e_config_file_controls_rendering() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[render]\nscale = 24\n\n[style]\nimage_color = \"#cc3300\"\n",
    )
    .unwrap();

    let mut args = args_for(&out, Some(20), None);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("run succeeds with config");
    assert!(out.join("20ft.png").exists());
}
