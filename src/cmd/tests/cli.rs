use std::env::temp_dir;
use std::fs;
use std::process::Command;

use uuid::Uuid;

fn ecomm_gen(config: &str, mode: &str) -> std::process::Output {
    let path = temp_dir().join(format!("{}.toml", Uuid::new_v4()));
    fs::write(&path, config).unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_ecomm-gen"))
        .args(["--mode", mode, "--config"])
        .arg(&path)
        .output()
        .unwrap();
    fs::remove_file(&path).unwrap();
    out
}

#[test]
fn exits_with_failure_on_empty_seed() {
    let dir = temp_dir().join(Uuid::new_v4().to_string());
    fs::create_dir_all(&dir).unwrap();

    let out = ecomm_gen(
        &format!(
            r#"
[output]
path = "{}"

[backfill]
customers = 0

[generator]
seed = 1
"#,
            dir.display()
        ),
        "incremental",
    );
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn exits_with_failure_on_missing_out_path() {
    let dir = temp_dir().join(Uuid::new_v4().to_string());

    let out = ecomm_gen(
        &format!("[output]\npath = \"{}\"\n", dir.display()),
        "backfill",
    );
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn backfill_succeeds() {
    let dir = temp_dir().join(Uuid::new_v4().to_string());
    fs::create_dir_all(&dir).unwrap();

    let out = ecomm_gen(
        &format!(
            r#"
[output]
path = "{}"

[backfill]
customers = 5
products = 3
orders = 4
"#,
            dir.display()
        ),
        "backfill",
    );
    assert!(out.status.success());
    assert!(dir.join("customers_backfill.csv").exists());
    assert!(dir.join("order_items_backfill.csv").exists());

    fs::remove_dir_all(&dir).unwrap();
}
