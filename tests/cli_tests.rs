use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    batch_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let batch_path = dir.path().join("batch.csv");

        let mut f = File::create(&batch_path).unwrap();
        writeln!(f, "racks,servers,budget_usd,power_kw,workload").unwrap();
        writeln!(f, "10,100,50000,30,web_services").unwrap();
        writeln!(f, "500,5000,2000000,5000,ai_training").unwrap();
        writeln!(f, "lots,5000,2000000,5000,ai_training").unwrap();

        Self { dir, batch_path }
    }

    fn write(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_topoplan"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

const SCENARIO_2: [&str; 10] = [
    "recommend",
    "--racks",
    "500",
    "--servers",
    "5000",
    "--budget",
    "2000000",
    "--power",
    "5000",
    "--workload=ai_training",
];

#[test]
fn test_recommend_table_output() {
    let ctx = TestContext::new();
    let out = run_in(ctx.dir.path(), &SCENARIO_2);
    assert!(out.status.success(), "{:?}", out);

    let text = stdout(&out);
    assert!(text.contains("Fat-Tree"));
    let rule = Regex::new(r"\|\s*#2\s*\|").unwrap();
    assert!(rule.is_match(&text), "rule column missing:\n{}", text);
    let conf = Regex::new(r"\b80%").unwrap();
    assert!(conf.is_match(&text));
}

#[test]
fn test_recommend_json_output() {
    let ctx = TestContext::new();
    let mut args = SCENARIO_2.to_vec();
    args.push("--json");
    let out = run_in(ctx.dir.path(), &args);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["primary"], "FAT_TREE");
    assert_eq!(json["rule_id"], 2);
    assert_eq!(json["classification"]["budget"], "HIGH");
}

#[test]
fn test_cli_flag_overrides_threshold() {
    let ctx = TestContext::new();
    // Raising large_min_racks above 500 leaves scenario 2 at MEDIUM scale.
    let mut args = SCENARIO_2.to_vec();
    args.extend_from_slice(&[
        "--large-min-racks",
        "1000",
        "--large-min-servers",
        "10000",
        "--json",
    ]);
    let out = run_in(ctx.dir.path(), &args);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["classification"]["scale"], "MEDIUM");
    assert_eq!(json["primary"], "LEAF_SPINE");
}

#[test]
fn test_config_file_is_applied() {
    let ctx = TestContext::new();
    let cfg = ctx.write(
        "planner.json",
        r#"{ "thresholds": { "budget": { "low_max": 3000000.0, "high_min": 4000000.0 } } }"#,
    );
    let mut args = vec!["--config", cfg.to_str().unwrap()];
    args.extend_from_slice(&SCENARIO_2);
    args.push("--json");
    let out = run_in(ctx.dir.path(), &args);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["classification"]["budget"], "LOW");
    assert_eq!(json["primary"], "THREE_TIER");
}

#[test]
fn test_bad_weights_file_fails() {
    let ctx = TestContext::new();
    let cfg = ctx.write("planner.json", r#"{ "weights": { "scale_match": 0.29 } }"#);
    let mut args = vec!["--config", cfg.to_str().unwrap()];
    args.extend_from_slice(&SCENARIO_2);
    let out = run_in(ctx.dir.path(), &args);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("sum to 1.0"));
}

#[test]
fn test_invalid_input_exit_code() {
    let ctx = TestContext::new();
    let out = run_in(
        ctx.dir.path(),
        &[
            "recommend", "--racks", "ten", "--servers", "100", "--budget", "1", "--power", "1",
        ],
    );
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("racks must be an integer"));
}

#[test]
fn test_strict_mode_rejects_negative_values() {
    let ctx = TestContext::new();
    let args = [
        "recommend", "--racks", "-5", "--servers", "100", "--budget", "50000", "--power", "30",
    ];
    let lenient = run_in(ctx.dir.path(), &args);
    assert!(lenient.status.success());

    let mut strict = args.to_vec();
    strict.push("--strict");
    let out = run_in(ctx.dir.path(), &strict);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_batch_reports_each_row() {
    let ctx = TestContext::new();
    let out = run_in(
        ctx.dir.path(),
        &["batch", "--input", ctx.batch_path.to_str().unwrap(), "--json"],
    );
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["recommendation"]["primary"], "THREE_TIER");
    assert_eq!(rows[1]["recommendation"]["primary"], "FAT_TREE");
    assert_eq!(rows[2]["line"], 4);
    assert!(rows[2]["error"].as_str().unwrap().contains("racks"));
}

#[test]
fn test_compare_lists_all_topologies() {
    let ctx = TestContext::new();
    let out = run_in(ctx.dir.path(), &["compare"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for name in ["Three-Tier", "Leaf-Spine", "Fat-Tree"] {
        assert!(text.contains(name), "missing {}", name);
    }

    let out = run_in(ctx.dir.path(), &["compare", "--topology", "leaf_spine"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("=== Leaf-Spine ==="));

    let out = run_in(ctx.dir.path(), &["compare", "--topology", "torus"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_audit_covers_27_triples() {
    let ctx = TestContext::new();
    let out = run_in(ctx.dir.path(), &["audit", "--json"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 27);
    let fat_tree = rows.iter().filter(|r| r["primary"] == "FAT_TREE").count();
    assert_eq!(fat_tree, 1);
}
