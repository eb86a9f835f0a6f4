use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn cli(store: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("--store").arg(store);
    cmd
}

#[test]
fn test_calculate_prints_report() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.args([
        "calculate", "--rate", "250", "--month", "march", "--year", "2026", "--item",
        "Needs=40", "--item", "Wants=40", "--item", "Savings=20",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("₱ 35,531.6"))
        .stdout(predicate::str::contains("Month of March 2026"))
        .stdout(predicate::str::contains("(9 working days)"))
        .stdout(predicate::str::contains("Tax: ₱ 2,893.4"))
        .stdout(predicate::str::contains("20% Allocated"));

    // Stateless: nothing was written.
    assert!(!dir.path().join("state.json").exists());
    Ok(())
}

#[test]
fn test_calculate_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.args([
        "calculate", "--rate", "250", "--month", "3", "--year", "2026", "--item", "All=100",
        "--json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"engine_version\""))
        .stdout(predicate::str::contains("\"withholding_tax\""));
    Ok(())
}

#[test]
fn test_calculate_rejects_incomplete_split() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.args([
        "calculate", "--rate", "250", "--month", "3", "--item", "Needs=40", "--item",
        "Wants=50",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Percentages must add up to 100%"));
    Ok(())
}

#[test]
fn test_calculate_rejects_bad_month() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.args(["calculate", "--rate", "250", "--month", "13", "--item", "All=100"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 12"));
    Ok(())
}

#[test]
fn test_draft_submit_and_breakdown() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = dir.path().join("state.json");

    cli(&store).args(["draft", "rate", "250"]).assert().success();
    cli(&store)
        .args(["draft", "month", "Mar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month: March"));
    cli(&store)
        .args(["draft", "submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breakdown submitted."));

    cli(&store)
        .args(["breakdown", "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₱ 35,531.6"));
    cli(&store)
        .arg("tab")
        .assert()
        .success()
        .stdout(predicate::str::diff("breakdown\n"));
    Ok(())
}

#[test]
fn test_draft_submit_blocked() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = dir.path().join("state.json");

    cli(&store)
        .args(["draft", "add", "--name", "Travel", "--percentage", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 115%"));
    cli(&store)
        .args(["draft", "submit"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Percentages must add up to 100%"));
    cli(&store)
        .arg("breakdown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No breakdown submitted yet"));
    Ok(())
}

#[test]
fn test_remove_unknown_item() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.args(["draft", "remove", "no-such-id"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no-such-id"));
    Ok(())
}

#[test]
fn test_loads_policy_from_config_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.args([
        "--config",
        "config/ph_semi_monthly",
        "calculate",
        "--rate",
        "250",
        "--month",
        "3",
        "--year",
        "2026",
        "--item",
        "All=100",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("₱ 35,531.6"));
    Ok(())
}

#[test]
fn test_default_item_ids_survive_between_runs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = dir.path().join("state.json");

    let output = cli(&store).args(["draft", "show"]).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    let id = stdout
        .lines()
        .find(|line| line.contains("Needs"))
        .and_then(|line| line.split_whitespace().next())
        .ok_or("no Needs item in draft")?
        .to_string();

    cli(&store)
        .args(["draft", "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Needs").not())
        .stdout(predicate::str::contains("Total: 60%"));
    Ok(())
}

#[test]
fn test_calculate_reports_overflow_instead_of_panicking() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = tempfile::tempdir()?;
    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.args([
        "calculate",
        "--rate",
        "10000000000000000000000000000",
        "--month",
        "3",
        "--year",
        "2026",
        "--item",
        "All=100",
    ]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("overflows"))
        .stderr(predicate::str::contains("panicked").not());
    Ok(())
}

#[test]
fn test_report_uses_policy_currency_symbol() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("policy");
    std::fs::create_dir(&config)?;
    let policy = std::fs::read_to_string("config/ph_semi_monthly/policy.yaml")?
        .replace("currency_symbol: \"₱\"", "currency_symbol: \"PHP\"");
    std::fs::write(config.join("policy.yaml"), policy)?;
    std::fs::copy(
        "config/ph_semi_monthly/tax_table.yaml",
        config.join("tax_table.yaml"),
    )?;

    let mut cmd = cli(&dir.path().join("state.json"));
    cmd.arg("--config").arg(&config).args([
        "calculate", "--rate", "250", "--month", "3", "--year", "2026", "--item", "All=100",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PHP 35,531.6"))
        .stdout(predicate::str::contains("₱").not());
    Ok(())
}
