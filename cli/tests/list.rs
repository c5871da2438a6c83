use std::fs;
use std::path::Path;

use anyhow::Result;
use predicates::str::contains;
use pretty_assertions::assert_eq;
use serde_json::Value as JsonValue;
use tempfile::TempDir;

fn parcel_command(parcels_dir: &Path) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("parcel")?;
    cmd.arg("--parcels-dir").arg(parcels_dir);
    Ok(cmd)
}

fn seed_registry(dir: &Path) -> Result<()> {
    fs::write(dir.join("alice.txt"), "ab-12 red box\nCD345\n# pending\n\n")?;
    fs::write(dir.join("bob.txt"), "1z-999-aa1\n")?;
    Ok(())
}

#[test]
fn list_prints_entries_and_summary() -> Result<()> {
    let parcels = TempDir::new()?;
    seed_registry(parcels.path())?;

    parcel_command(parcels.path())?
        .arg("list")
        .assert()
        .success()
        .stdout(contains("1Z999AA1 -> bob"))
        .stdout(contains("CD345 -> alice"))
        .stdout(contains("AB12 -> alice"))
        .stdout(contains("3 entries loaded"))
        .stdout(contains("alice: 2"))
        .stdout(contains("bob: 1"));

    Ok(())
}

#[test]
fn list_orders_codes_longest_first() -> Result<()> {
    let parcels = TempDir::new()?;
    seed_registry(parcels.path())?;

    let output = parcel_command(parcels.path())?.arg("list").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let first = stdout.lines().next().expect("at least one line");
    assert_eq!(first, "1Z999AA1 -> bob");

    Ok(())
}

#[test]
fn list_json_reports_entries_and_owner_counts() -> Result<()> {
    let parcels = TempDir::new()?;
    seed_registry(parcels.path())?;

    let output = parcel_command(parcels.path())?
        .args(["list", "--json"])
        .output()?;
    assert!(output.status.success());
    let payload: JsonValue = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["entries"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(payload["owners"]["alice"], 2);
    assert_eq!(payload["owners"]["bob"], 1);

    Ok(())
}

#[test]
fn missing_parcels_dir_fails_with_diagnostic() -> Result<()> {
    let parcels = TempDir::new()?;
    let missing = parcels.path().join("no-such-dir");

    parcel_command(&missing)?
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("no-such-dir"));

    Ok(())
}
