use std::fs;
use std::process::Command;

use serde_json::Value;

fn spin_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_spin-sim"))
        .args(args)
        .output()
        .expect("run spin-sim")
}

fn stdout_json(output: &std::process::Output) -> Value {
    let body = String::from_utf8(output.stdout.clone()).expect("utf8");
    serde_json::from_str(&body).expect("json")
}

#[test]
fn decode_reports_configuration_and_magnetization() {
    let output = spin_sim(&["decode", "--sites", "8", "--index", "10"]);
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["configuration"], serde_json::json!([0, 0, 0, 0, 1, 0, 1, 0]));
    assert_eq!(value["magnetization"], -4);
    assert_eq!(value["signs"], "----+-+-");
}

#[test]
fn decode_rejects_out_of_range_index() {
    let output = spin_sim(&["decode", "--sites", "3", "--index", "8"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid-index"));
}

#[test]
fn parse_skips_unknown_characters() {
    let output = spin_sim(&["parse", "--signs", "+x-"]);
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["configuration"], serde_json::json!([1, 0]));
    assert_eq!(value["magnetization"], 0);
    assert_eq!(value["index"], 2);
}

#[test]
fn parse_omits_index_that_overflows_64_bits() {
    let signs = "+".repeat(70);
    let output = Command::new(env!("CARGO_BIN_EXE_spin-sim"))
        .args(["parse", "--signs", signs.as_str()])
        .env("RUST_LOG", "debug")
        .output()
        .expect("run spin-sim");
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["magnetization"], 70);
    assert!(value.get("index").is_none());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("omitting decimal index"));
    assert!(stderr.contains("index-overflow"));
}

#[test]
fn enumerate_from_yaml_writes_summary() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("run.yaml");
    let out = dir.path().join("out/summary.json");
    fs::write(&config, "site_count: 3\n").unwrap();

    let output = spin_sim(&[
        "enumerate",
        "--config",
        config.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["configurations"], 8);
    assert_eq!(value["histogram"]["-1"], 3);
    assert_eq!(value["histogram"]["3"], 1);
}

#[test]
fn enumerate_full_space_to_stdout() {
    let output = spin_sim(&["enumerate", "--sites", "4"]);
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["configurations"], 16);
    assert_eq!(value["histogram"]["0"], 6);
}
