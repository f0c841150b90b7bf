use assert_cmd::Command;
use std::fs;

#[test]
fn polyplot_renders_png_and_sidecar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("plots/octa.png");
    let json_path = dir.path().join("plots/octa.json");

    Command::cargo_bin("polyplot")
        .expect("polyplot bin")
        .args([
            "--shape",
            "octahedron",
            "--output",
            png_path.to_str().unwrap(),
            "--json",
            json_path.to_str().unwrap(),
            "--rotate-x",
            "-20",
            "--width",
            "320",
            "--height",
            "240",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(&png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");

    let json = fs::read_to_string(&json_path).expect("sidecar");
    assert!(json.contains("\"name\": \"Octahedron\""));
    assert!(json.contains("\"generated_at\""));
    assert!(json.contains("\"edges\""));
}

#[test]
fn polyplot_rejects_unknown_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("polyplot")
        .expect("polyplot bin")
        .args([
            "--shape",
            "dodecahedron",
            "--output",
            dir.path().join("x.png").to_str().unwrap(),
        ])
        .assert()
        .failure();
}
