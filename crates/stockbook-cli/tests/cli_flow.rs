use std::path::{Path, PathBuf};
use std::process::Command;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_stockbook"))
}

struct TestEnv {
    _root: tempfile::TempDir,
    store_dir: PathBuf,
    config_home: PathBuf,
}

fn test_env() -> TestEnv {
    let root = tempfile::tempdir().expect("temp dir");
    let store_dir = root.path().join("store");
    let config_home = root.path().join("config");
    std::fs::create_dir_all(&config_home).expect("create config home");
    TestEnv {
        store_dir,
        config_home,
        _root: root,
    }
}

fn stockbook(env: &TestEnv, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(bin());
    cmd.args(args)
        .env("STOCKBOOK_STORE", &env.store_dir)
        .env("XDG_CONFIG_HOME", &env.config_home)
        .env("HOME", env.config_home.parent().unwrap());
    cmd.output().expect("run stockbook")
}

fn init_empty(env: &TestEnv) {
    let out = stockbook(env, &["init", "--no-seed"]);
    assert!(
        out.status.success(),
        "init failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

fn list_json(env: &TestEnv) -> serde_json::Value {
    let out = stockbook(env, &["list", "--json"]);
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).expect("parse list json")
}

fn add_drill(env: &TestEnv) -> String {
    let out = stockbook(
        env,
        &[
            "add",
            "Cordless Drill",
            "--category",
            "Power Tools",
            "--barcode",
            "045242048572",
            "--qty",
            "Warehouse=10",
            "--min-stock",
            "2",
            "--unit",
            "pcs",
            "--price",
            "149.00",
        ],
    );
    assert!(
        out.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let value = list_json(env);
    value.as_array().expect("array")[0]["id"]
        .as_str()
        .expect("id")
        .to_string()
}

#[test]
fn test_cli_init_add_list_show() {
    let env = test_env();
    init_empty(&env);
    let id = add_drill(&env);

    let value = list_json(&env);
    let array = value.as_array().expect("list output array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["name"], "Cordless Drill");
    assert_eq!(array[0]["totalQuantity"], 10);
    assert_eq!(array[0]["lowStock"], false);

    let show = stockbook(&env, &["show", &id, "--json"]);
    assert!(show.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&show.stdout).expect("parse show json");
    assert_eq!(shown["id"].as_str(), Some(id.as_str()));
    assert_eq!(shown["quantities"]["Warehouse"], 10);
}

#[test]
fn test_cli_init_seeds_starter_inventory() {
    let env = test_env();
    let out = stockbook(&env, &["init"]);
    assert!(out.status.success());
    let value = list_json(&env);
    assert_eq!(value.as_array().expect("array").len(), 20);
}

#[test]
fn test_cli_adjust_writes_diff_to_log() {
    let env = test_env();
    init_empty(&env);
    let id = add_drill(&env);

    let adjust = stockbook(
        &env,
        &["adjust", &id, "--set", "Warehouse=7", "--set", "Van 1=2"],
    );
    assert!(
        adjust.status.success(),
        "adjust failed: {}",
        String::from_utf8_lossy(&adjust.stderr)
    );
    let stdout = String::from_utf8_lossy(&adjust.stdout);
    assert!(stdout.contains("changed=true"));
    assert!(stdout.contains("total_quantity=9"));

    let log = stockbook(&env, &["log", "--json"]);
    assert!(log.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&log.stdout).expect("parse log json");
    let newest = &entries.as_array().expect("log array")[0];
    assert_eq!(newest["action"], "ADJUST");
    let details = newest["details"].as_str().expect("details");
    assert!(details.contains("Warehouse: -3"));
    assert!(details.contains("Van 1: +2"));
}

#[test]
fn test_cli_adjust_to_same_values_is_silent() {
    let env = test_env();
    init_empty(&env);
    let id = add_drill(&env);

    let adjust = stockbook(&env, &["adjust", &id, "--set", "Warehouse=10"]);
    assert!(adjust.status.success());
    assert!(String::from_utf8_lossy(&adjust.stdout).contains("changed=false"));

    let log = stockbook(&env, &["log", "--json"]);
    let entries: serde_json::Value = serde_json::from_slice(&log.stdout).expect("parse log json");
    // Only the CREATE entry from add
    assert_eq!(entries.as_array().expect("log array").len(), 1);
}

#[test]
fn test_cli_delete_then_stale_reference() {
    let env = test_env();
    init_empty(&env);
    let id = add_drill(&env);

    let delete = stockbook(&env, &["delete", &id, "--yes"]);
    assert!(delete.status.success());
    assert_eq!(list_json(&env).as_array().expect("array").len(), 0);

    // The id is now stale; the CLI reports not-found with exit code 3
    let again = stockbook(&env, &["delete", &id, "--yes"]);
    assert_eq!(again.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&again.stderr);
    assert!(stderr.contains("No item matching ID"));
    assert!(stderr.contains("Hint:"));
}

#[test]
fn test_cli_show_short_id_prefix() {
    let env = test_env();
    init_empty(&env);
    let id = add_drill(&env);

    let show = stockbook(&env, &["show", &id[..8], "--json"]);
    assert!(show.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&show.stdout).expect("parse show json");
    assert_eq!(shown["id"].as_str(), Some(id.as_str()));
}

#[test]
fn test_cli_export_import_round_trip() {
    let env = test_env();
    let out = stockbook(&env, &["init"]);
    assert!(out.status.success());

    let backup = env.config_home.join("backup.json");
    let export = stockbook(
        &env,
        &["export", "--format", "json", "--output", backup.to_str().unwrap()],
    );
    assert!(export.status.success());
    let before = std::fs::read_to_string(&backup).expect("read backup");

    let clear = stockbook(&env, &["clear", "--yes"]);
    assert!(clear.status.success());
    assert_eq!(list_json(&env).as_array().expect("array").len(), 0);

    let import = stockbook(&env, &["import", backup.to_str().unwrap(), "--yes"]);
    assert!(
        import.status.success(),
        "import failed: {}",
        String::from_utf8_lossy(&import.stderr)
    );

    let second = env.config_home.join("backup2.json");
    let export2 = stockbook(
        &env,
        &["export", "--format", "json", "--output", second.to_str().unwrap()],
    );
    assert!(export2.status.success());
    let after = std::fs::read_to_string(&second).expect("read second backup");
    assert_eq!(before, after);
}

#[test]
fn test_cli_import_rejects_non_array() {
    let env = test_env();
    init_empty(&env);
    add_drill(&env);

    let bad = env.config_home.join("bad.json");
    std::fs::write(&bad, r#"{"items": []}"#).expect("write bad file");

    let import = stockbook(&env, &["import", bad.to_str().unwrap(), "--yes"]);
    assert_eq!(import.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&import.stderr).contains("Invalid file format"));

    // No state change
    assert_eq!(list_json(&env).as_array().expect("array").len(), 1);
}

#[test]
fn test_cli_import_legacy_backup_migrates() {
    let env = test_env();
    init_empty(&env);

    let legacy = env.config_home.join("legacy.json");
    std::fs::write(
        &legacy,
        r#"[{"id":"1","name":"Old Drill","category":"Power Tools","location":"Warehouse","quantity":5,"minStock":2,"unit":"pcs"}]"#,
    )
    .expect("write legacy file");

    let import = stockbook(&env, &["import", legacy.to_str().unwrap(), "--yes"]);
    assert!(import.status.success());

    let value = list_json(&env);
    let item = &value.as_array().expect("array")[0];
    assert_eq!(item["quantities"]["Warehouse"], 5);
    assert_eq!(item["price"], 0.0);
}

#[test]
fn test_cli_list_filters_are_conjunctive() {
    let env = test_env();
    init_empty(&env);
    add_drill(&env);

    // Search matches, category does not
    let out = stockbook(
        &env,
        &["list", "--json", "--search", "drill", "--category", "Materials"],
    );
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse json");
    assert_eq!(value.as_array().expect("array").len(), 0);

    // Location with zero recorded stock excludes the item
    let out = stockbook(&env, &["list", "--json", "--location", "Van 1"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse json");
    assert_eq!(value.as_array().expect("array").len(), 0);

    let out = stockbook(&env, &["list", "--json", "--location", "Warehouse"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse json");
    assert_eq!(value.as_array().expect("array").len(), 1);
}

#[test]
fn test_cli_scan_routes_by_barcode_and_id() {
    let env = test_env();
    init_empty(&env);
    let id = add_drill(&env);

    let by_barcode = stockbook(&env, &["scan", "045242048572", "--json"]);
    assert!(by_barcode.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&by_barcode.stdout).expect("parse scan json");
    assert_eq!(value["outcome"], "existing");
    assert_eq!(value["itemId"].as_str(), Some(id.as_str()));

    let by_id = stockbook(&env, &["scan", &id, "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&by_id.stdout).expect("parse scan json");
    assert_eq!(value["outcome"], "existing");

    let unknown = stockbook(&env, &["scan", "999999999999", "--json"]);
    assert!(unknown.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&unknown.stdout).expect("parse scan json");
    assert_eq!(value["outcome"], "new");
    assert_eq!(value["barcode"], "999999999999");
}

#[test]
fn test_cli_stats_counts() {
    let env = test_env();
    init_empty(&env);
    add_drill(&env);

    let out = stockbook(&env, &["stats", "--json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse stats json");
    assert_eq!(value["totalItems"], 1);
    assert_eq!(value["lowStockItems"], 0);
    assert_eq!(value["totalTools"], 1);
    assert_eq!(value["activeJobSiteItems"], 0);
}

#[test]
fn test_cli_export_csv_has_breakdown_columns() {
    let env = test_env();
    init_empty(&env);
    add_drill(&env);

    let out = stockbook(&env, &["export", "--format", "csv"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(
        "Name,Category,Locations Breakdown,Total Quantity,Unit,Price,Min Stock,Barcode,Description"
    ));
    assert!(stdout.contains("\"Warehouse: 10\""));
}

#[test]
fn test_cli_export_invoice_doc_with_grand_total() {
    let env = test_env();
    init_empty(&env);
    let id = add_drill(&env);

    let selection = format!("{}=2", id);
    let out = stockbook(&env, &["export", "--doc", "invoice", "--item", &selection]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Item,Description,Qty,Unit Price,Total"));
    assert!(stdout.contains(",,,GRAND TOTAL,298.00"));

    // Writing to a file prints the totals block (default 8% tax)
    let doc = env.config_home.join("invoice.csv");
    let out = stockbook(
        &env,
        &[
            "export",
            "--doc",
            "invoice",
            "--item",
            &selection,
            "--output",
            doc.to_str().unwrap(),
        ],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("subtotal=$298.00"));
    assert!(stdout.contains("total=$321.84"));
}

#[test]
fn test_cli_export_events_are_audited() {
    let env = test_env();
    init_empty(&env);

    let out = stockbook(&env, &["export", "--format", "json"]);
    assert!(out.status.success());

    let log = stockbook(&env, &["log", "--json"]);
    let entries: serde_json::Value = serde_json::from_slice(&log.stdout).expect("parse log json");
    let newest = &entries.as_array().expect("log array")[0];
    assert_eq!(newest["action"], "SETTINGS");
    assert_eq!(newest["details"], "Exported inventory to JSON");
}

#[test]
fn test_cli_settings_set_and_show() {
    let env = test_env();
    init_empty(&env);

    let set = stockbook(&env, &["settings", "set", "company-name", "Acme Contracting"]);
    assert!(set.status.success());

    let show = stockbook(&env, &["settings", "show", "--json"]);
    assert!(show.status.success());
    let value: serde_json::Value = serde_json::from_slice(&show.stdout).expect("parse json");
    assert_eq!(value["companyName"], "Acme Contracting");

    let bad = stockbook(&env, &["settings", "set", "no-such-key", "1"]);
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_cli_missing_store_message() {
    let env = test_env();
    // No init: the store directory does not exist
    let out = stockbook(&env, &["list"]);
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("No store found at"));
    assert!(stderr.contains("stockbook init"));
}

#[test]
fn test_cli_corrupt_inventory_recovers_with_seed() {
    let env = test_env();
    init_empty(&env);
    std::fs::write(env.store_dir.join("inventory.json"), "][ broken").expect("corrupt blob");

    let out = stockbook(&env, &["list", "--json"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("starter inventory"));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse json");
    assert_eq!(value.as_array().expect("array").len(), 20);
}

#[test]
fn test_cli_clear_logs_empties_audit_trail() {
    let env = test_env();
    init_empty(&env);
    add_drill(&env);

    let clear = stockbook(&env, &["clear", "--yes", "--logs"]);
    assert!(clear.status.success());

    let log = stockbook(&env, &["log", "--json"]);
    let entries: serde_json::Value = serde_json::from_slice(&log.stdout).expect("parse log json");
    assert_eq!(entries.as_array().expect("log array").len(), 0);
}

#[test]
fn test_cli_list_unknown_location_hints_vocabulary() {
    let env = test_env();
    init_empty(&env);
    add_drill(&env);

    let out = stockbook(&env, &["list", "--location", "Moon Base"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No items found."));
    assert!(stdout.contains("known locations:"));
    // Union of settings vocabulary and locations present on items
    assert!(stdout.contains("Warehouse"));
}

#[test]
fn test_cli_quickstart_output() {
    let env = test_env();
    let output = stockbook(&env, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Quickstart"));
    assert!(stdout.contains("stockbook init"));
}

#[test]
fn test_cli_invalid_args_exit_code() {
    let env = test_env();
    let output = stockbook(&env, &["add"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:") || stderr.contains("error:"));
}

#[test]
fn test_cli_quantity_coercion_at_boundary() {
    let env = test_env();
    init_empty(&env);

    let out = stockbook(
        &env,
        &[
            "add",
            "Odd Item",
            "--category",
            "Materials",
            "--qty",
            "Warehouse=-5",
            "--price",
            "not-a-number",
        ],
    );
    assert!(out.status.success());

    let value = list_json(&env);
    let item = &value.as_array().expect("array")[0];
    assert_eq!(item["quantities"]["Warehouse"], 0);
    assert_eq!(item["price"], 0.0);
}

fn config_file(env: &TestEnv) -> PathBuf {
    Path::new(&env.config_home)
        .join("stockbook")
        .join("config.toml")
}

#[test]
fn test_cli_init_writes_config() {
    let env = test_env();
    init_empty(&env);

    let config_path = config_file(&env);
    assert!(config_path.exists(), "config file should exist");
    let contents = std::fs::read_to_string(&config_path).expect("read config");
    let value: toml::Value = contents.parse().expect("parse config");
    assert_eq!(
        value
            .get("store")
            .and_then(|section| section.get("path"))
            .and_then(|path| path.as_str()),
        Some(env.store_dir.to_string_lossy().as_ref())
    );
}
