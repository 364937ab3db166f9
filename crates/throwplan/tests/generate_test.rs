use std::fs;

use tempfile::tempdir;

use throwplan::{AppConfig, DistanceSpec, InputParameters, ThrowplanError, generate};

fn params_with(
    distance: Option<i64>,
    series: Option<&str>,
    output_dir: &std::path::Path,
) -> InputParameters {
    InputParameters::new(
        31.0,
        16.0,
        0.8,
        DistanceSpec::from_options(distance, series).expect("valid distance spec"),
        "16:10".parse().expect("valid aspect ratio"),
        output_dir,
    )
    .expect("valid parameters")
}

#[test]
fn single_distance_writes_one_named_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let params = params_with(Some(20), None, &out);
    let written = generate(&params, &AppConfig::default()).expect("generation succeeds");

    assert_eq!(written.len(), 1);
    assert_eq!(written[0], out.join("20ft.png"));

    let metadata = fs::metadata(&written[0]).expect("output file exists");
    assert!(metadata.len() > 0, "output file is not empty");
}

#[test]
fn series_writes_one_file_per_distance() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let params = params_with(None, Some("18-20"), &out);
    let written = generate(&params, &AppConfig::default()).expect("generation succeeds");

    assert_eq!(written.len(), 3);
    for (path, name) in written.iter().zip(["18ft.png", "19ft.png", "20ft.png"]) {
        assert_eq!(path.file_name().unwrap().to_string_lossy(), name);
        assert!(path.exists());
    }

    // Nothing else was written
    let entries = fs::read_dir(&out).unwrap().count();
    assert_eq!(entries, 3);
}

#[test]
fn output_directory_is_created_if_absent() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("a").join("b").join("c");

    let params = params_with(Some(20), None, &out);
    generate(&params, &AppConfig::default()).expect("generation succeeds");

    assert!(out.join("20ft.png").exists());
}

#[test]
fn uncreatable_output_directory_is_an_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // A regular file where the output directory should go
    let blocker = temp_dir.path().join("blocked");
    fs::write(&blocker, b"not a directory").unwrap();

    let params = params_with(Some(20), None, &blocker);
    let err = generate(&params, &AppConfig::default()).unwrap_err();
    assert!(matches!(err, ThrowplanError::Io(_)), "got {err:?}");
}

#[test]
fn invalid_color_config_fails_before_writing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out = temp_dir.path().join("drawings");

    let config: AppConfig = toml::from_str(
        r#"
        [style]
        surface_color = "charcoal"
        "#,
    )
    .expect("config deserializes");

    let params = params_with(Some(20), None, &out);
    let err = generate(&params, &config).unwrap_err();
    assert!(matches!(err, ThrowplanError::InvalidInput(_)), "got {err:?}");
    assert!(!out.join("20ft.png").exists());
}
