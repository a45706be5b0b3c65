#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn shelf_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("shelf"));
    cmd.current_dir(temp.path())
        .env_remove("SHELF_DATA_DIR")
        .env_remove("SHELF_FILE_NAME")
        .arg("--data")
        .arg(temp.path().join("data"));
    cmd
}

fn add_shoe(temp: &TempDir, name: &str) {
    shelf_cmd(temp)
        .args([
            "add",
            "--category",
            "shoes",
            "--name",
            name,
            "--link",
            "https://example.com/shoe",
            "--original-price",
            "200",
            "--sale-price",
            "150",
            "--feature",
            "Light, Breathable",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added"));
}

fn catalog_file(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("data").join("products.json")
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn init_add_list_delete_workflow() {
    let temp = TempDir::new().unwrap();

    // 1. Init writes an empty document
    shelf_cmd(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));
    assert_eq!(read_json(&catalog_file(&temp)), serde_json::json!({}));

    // 2. Second init leaves it alone
    shelf_cmd(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // 3. Two products in one category get ids 1 and 2
    add_shoe(&temp, "Runner");
    add_shoe(&temp, "Trail");

    let doc = read_json(&catalog_file(&temp));
    let shoes = doc["shoes"].as_array().unwrap();
    assert_eq!(shoes.len(), 2);
    assert_eq!(shoes[0]["id"], 1);
    assert_eq!(shoes[1]["id"], 2);
    assert_eq!(shoes[0]["discount"], 25);
    assert_eq!(shoes[0]["features"], serde_json::json!(["Light", "Breathable"]));

    // 4. Listing
    shelf_cmd(&temp)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"affiliateLink\""))
        .stdout(predicate::str::contains("Trail"));

    shelf_cmd(&temp)
        .args(["categories", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shoes"));

    // 5. Delete keeps the remaining id
    shelf_cmd(&temp)
        .args(["delete", "shoes", "1"])
        .assert()
        .success();

    let doc = read_json(&catalog_file(&temp));
    let shoes = doc["shoes"].as_array().unwrap();
    assert_eq!(shoes.len(), 1);
    assert_eq!(shoes[0]["id"], 2);

    // 6. Ids continue from the max, not the count
    add_shoe(&temp, "Sprint");
    let doc = read_json(&catalog_file(&temp));
    assert_eq!(doc["shoes"][1]["id"], 3);
}

#[test]
fn delete_missing_product_fails() {
    let temp = TempDir::new().unwrap();
    add_shoe(&temp, "Runner");

    shelf_cmd(&temp)
        .args(["delete", "shoes", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found"));

    shelf_cmd(&temp)
        .args(["delete", "hats", "1"])
        .assert()
        .failure();
}

#[test]
fn add_without_link_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    shelf_cmd(&temp)
        .args(["add", "--category", "shoes", "--name", "Runner"])
        .assert()
        .failure();
    assert!(!catalog_file(&temp).exists());
}

#[test]
fn add_with_invalid_rating_fails() {
    let temp = TempDir::new().unwrap();
    shelf_cmd(&temp)
        .args([
            "add",
            "--category",
            "shoes",
            "--name",
            "Runner",
            "--link",
            "https://example.com",
            "--rating",
            "7",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating"));
}

#[test]
fn corrupt_catalog_lists_empty_but_doctor_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(catalog_file(&temp), "{ not json").unwrap();

    shelf_cmd(&temp)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));

    shelf_cmd(&temp)
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains("unreadable"));

    // Init refuses to overwrite it
    shelf_cmd(&temp).arg("init").assert().failure();
    assert_eq!(fs::read_to_string(catalog_file(&temp)).unwrap(), "{ not json");
}

#[test]
fn config_prints_template() {
    let temp = TempDir::new().unwrap();
    shelf_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data_dir"));
}
