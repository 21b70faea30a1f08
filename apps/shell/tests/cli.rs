use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::process::Command;

fn packwise() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("packwise"));
    cmd.env("PACKWISE_CONFIG", "does-not-exist");
    cmd
}

#[test]
fn correct_prints_the_plan() {
    packwise()
        .args(["correct", "12001"])
        .assert()
        .success()
        .stdout(predicate::eq("{\"250\":1,\"2000\":1,\"5000\":2}\n"));
}

#[test]
fn incorrect_prints_the_allocations() {
    packwise()
        .args(["incorrect", "251"])
        .assert()
        .success()
        .stdout(predicate::eq("[{\"5000\":1},{\"2000\":1},{\"1000\":1},{\"250\":2}]\n"));
}

#[test]
fn catalog_lists_sizes() {
    packwise()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::eq("[5000,2000,1000,500,250]\n"));
}

#[test]
fn invalid_orders_fail() {
    for (x, message) in [
        ("abc", "'x' must be an integer"),
        ("-1", "'x' must be >= 1"),
        ("0", "'x' must be >= 1"),
    ] {
        packwise()
            .args(["correct", x])
            .assert()
            .failure()
            .stderr(predicate::str::contains(message));
    }
}

#[test]
fn max_order_flag_overrides_the_ceiling() {
    packwise()
        .args(["--max-order", "100", "correct", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'x' is too large"));
}

#[test]
fn environment_overrides_the_ceiling() {
    packwise()
        .env("PACKWISE__PACKING__MAX_ORDER", "100")
        .args(["incorrect", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'x' is too large"));
}

#[test]
fn no_arguments_prints_help() {
    packwise().assert().failure().stderr(predicate::str::contains("Usage"));
}
