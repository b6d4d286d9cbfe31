use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn plate() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("plate").unwrap();
    cmd.env_remove("PLATE_MENU").env_remove("PLATE_LOG");
    cmd
}

fn json_of(cmd: &mut Command) -> Value {
    let output = cmd.arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

const CUSTOM_MENU: &str = r#"
[[restaurants]]
id = "bukka"
name = "Corner Bukka"

[[items]]
restaurant_id = "bukka"
id = "pizza"
name = "Stone-baked Pizza"
price = "₦6,500"

[[items]]
restaurant_id = "bukka"
id = "zobo"
name = "Zobo"
price = 800
category = "drinks"
"#;

fn write_menu(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("menu.toml");
    fs::write(&path, CUSTOM_MENU).unwrap();
    path
}

// ---- restaurants ----

#[test]
fn restaurants_lists_sample_data() {
    plate()
        .arg("restaurants")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chicken Republic"))
        .stdout(predicate::str::contains("Hungryman Eatery"))
        .stdout(predicate::str::contains("closed"));
}

#[test]
fn restaurants_search_filters_by_name() {
    let v = json_of(plate().args(["restaurants", "--search", "palace"]));
    let list = v.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "The Food Palace");
}

#[test]
fn restaurants_search_without_match() {
    plate()
        .args(["restaurants", "-s", "sushi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No restaurants found"));
}

// ---- menu ----

#[test]
fn menu_defaults_to_food_tab() {
    plate()
        .args(["menu", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[food]"))
        .stdout(predicate::str::contains("Jollof Rice & Chicken"))
        .stdout(predicate::str::contains("3,500"))
        .stdout(predicate::str::contains("Chapman").not());
}

#[test]
fn menu_quick_add_shows_counts() {
    let v = json_of(plate().args([
        "menu", "1", "--tab", "drinks", "--add", "7", "--add", "7", "--add", "7", "--add", "9",
    ]));
    let items = v["items"].as_array().unwrap();
    let added = |id: &str| {
        items
            .iter()
            .find(|i| i["item"]["id"] == id)
            .map(|i| i["added"].as_u64().unwrap())
            .unwrap()
    };
    assert_eq!(added("7"), 3);
    assert_eq!(added("9"), 1);
    assert_eq!(added("8"), 0);
    assert_eq!(v["total_added"], 4);
    assert_eq!(v["added"], serde_json::json!({ "7": 3, "9": 1 }));
    assert_eq!(v["tab"], "drinks");
}

#[test]
fn menu_text_shows_added_marker() {
    plate()
        .args(["menu", "1", "--add", "3", "--add", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 2"));
}

#[test]
fn menu_rejects_unknown_tab() {
    plate()
        .args(["menu", "1", "--tab", "desserts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown menu tab"));
}

#[test]
fn menu_rejects_add_of_unknown_item() {
    plate()
        .args(["menu", "1", "--add", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'99' not found"));
}

#[test]
fn menu_unknown_restaurant_fails() {
    plate()
        .args(["menu", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("restaurant not found: 42"));
}

// ---- catalog ----

#[test]
fn catalog_lists_both_groups() {
    let v = json_of(plate().arg("catalog"));
    assert_eq!(v["sauces"].as_array().unwrap().len(), 5);
    assert_eq!(v["extras"].as_array().unwrap().len(), 5);
    assert_eq!(v["sauces"][0]["id"], "none");
    assert_eq!(v["sauces"][0]["price"], 0);
    assert_eq!(v["no_sauce"], "none");
}

#[test]
fn catalog_text_names_the_no_sauce_choice() {
    plate()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("(choose 'none' for no sauce)"));
}

// ---- quote ----

#[test]
fn quote_itemizes_modifiers() {
    let dir = TempDir::new().unwrap();
    let menu = write_menu(&dir);
    let v = json_of(plate().arg("--menu").arg(&menu).args([
        "quote", "bukka", "pizza", "--sauce", "pepper", "--extra", "cheese", "--extra",
        "plantain", "-q", "2",
    ]));
    let b = &v["breakdown"];
    assert_eq!(b["base_price"], 6500);
    assert_eq!(b["sauce_cost"], 300);
    assert_eq!(b["extras_cost"], 900);
    assert_eq!(b["unit_cost"], 7700);
    assert_eq!(b["quantity"], 2);
    assert_eq!(b["total"], 15400);
}

#[test]
fn quote_plain_item_is_base_price() {
    let v = json_of(plate().args(["quote", "1", "9"]));
    assert_eq!(v["breakdown"]["total"], 1200);
    assert!(v["configuration"].get("selected_sauce_id").is_none());
}

#[test]
fn quote_text_output() {
    plate()
        .args(["quote", "1", "1", "--sauce", "tomato", "--extra", "egg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jollof Rice & Chicken (Chicken Republic)"))
        .stdout(predicate::str::contains("Tomato sauce"))
        .stdout(predicate::str::contains("Fried egg"))
        .stdout(predicate::str::contains("3,950"));
}

#[test]
fn quote_extra_named_twice_is_deselected() {
    let v = json_of(plate().args([
        "quote", "1", "5", "--extra", "egg", "--extra", "cheese", "--extra", "egg",
    ]));
    assert_eq!(v["breakdown"]["extras_cost"], 500);
    assert_eq!(v["configuration"]["selected_extra_ids"], serde_json::json!(["cheese"]));
}

#[test]
fn quote_unknown_extra_fails_without_total() {
    plate()
        .args(["quote", "1", "1", "--extra", "truffle"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown extra reference: truffle"));
}

#[test]
fn quote_zero_quantity_clamps_unless_strict() {
    let v = json_of(plate().args(["quote", "1", "8", "-q", "0"]));
    assert_eq!(v["breakdown"]["quantity"], 1);
    assert_eq!(v["breakdown"]["total"], 800);

    plate()
        .args(["quote", "1", "8", "-q", "0", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid quantity"));
}

#[test]
fn menu_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let menu = write_menu(&dir);
    let v = json_of(plate().env("PLATE_MENU", &menu).args(["quote", "bukka", "zobo"]));
    assert_eq!(v["breakdown"]["total"], 800);
}

#[test]
fn broken_menu_file_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.toml");
    fs::write(&path, "[[items]]\nrestaurant_id = \"x\"\nid = \"y\"\nname = \"Y\"\nprice = 1\n")
        .unwrap();
    plate()
        .arg("--menu")
        .arg(&path)
        .arg("restaurants")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown restaurant 'x'"));
}

// ---- checkout ----

#[test]
fn checkout_requires_sauce() {
    plate()
        .args(["checkout", "1", "2", "--extra", "cheese"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a sauce must be selected"));
}

#[test]
fn checkout_with_none_sauce_succeeds() {
    plate()
        .args(["checkout", "1", "2", "--sauce", "none", "--note", "extra spicy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("order line "))
        .stdout(predicate::str::contains("4,000"))
        .stdout(predicate::str::contains("extra spicy"));
}

#[test]
fn checkout_zero_quantity_hands_off_one_unit() {
    let zero = json_of(plate().args(["checkout", "1", "2", "--sauce", "none", "-q", "0"]));
    let one = json_of(plate().args(["checkout", "1", "2", "--sauce", "none", "-q", "1"]));

    assert_eq!(zero["configuration"]["quantity"], 1);
    assert_eq!(zero["breakdown"]["quantity"], 1);
    assert_eq!(zero["breakdown"]["total"], 4000);
    assert_eq!(zero["id"], one["id"]);
}

#[test]
fn checkout_id_ignores_extras_order() {
    let a = json_of(plate().args([
        "checkout", "1", "1", "--sauce", "mayo", "--extra", "cheese", "--extra", "egg",
    ]));
    let b = json_of(plate().args([
        "checkout", "1", "1", "--sauce", "mayo", "--extra", "egg", "--extra", "cheese",
    ]));
    assert_eq!(a["breakdown"]["total"], 4400);
    assert_eq!(a["id"], b["id"]);
}

#[test]
fn checkout_json_is_stable_handoff() {
    let args = ["checkout", "3", "4", "--sauce", "garlic", "--extra", "chicken", "-q", "3"];
    let a = json_of(plate().args(args));
    let b = json_of(plate().args(args));

    assert_eq!(a["id"].as_str().unwrap().len(), 64);
    assert_eq!(a["id"], b["id"]);
    assert_eq!(a["configuration"]["base_item_id"], "4");
    assert_eq!(a["breakdown"]["unit_cost"], 7050);
    assert_eq!(a["breakdown"]["total"], 21150);
    assert!(a["confirmed_at"].is_string());
}

#[test]
fn logging_goes_to_stderr() {
    let output = plate()
        .env("PLATE_LOG", "debug")
        .args(["--json", "menu", "1", "--add", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout["total_added"], 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("ledger increment"));
}
