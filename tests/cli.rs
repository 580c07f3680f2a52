//! E2E tests for the leavepay commands

use std::process::{Command, Output};

fn leavepay(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_leavepay"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test the phase breakdown from a plan file
#[test]
fn breakdown_from_plan_file() {
    let output = leavepay(&["breakdown", "-p", "tests/data/plan.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Government Pay (21 weeks)"));
    assert!(stdout.contains("Non-Primary (Gross): $5,000/month"));
    assert!(stdout.contains("Primary (Gross): $4,108/month"));
    assert!(stdout.contains("Total: $9,108/month"));
    assert!(stdout.contains("Paid Leave (10 weeks)"));
    assert!(stdout.contains("Total: $11,000/month"));
}

/// Test flags override the plan file
#[test]
fn breakdown_flags_override_file() {
    let output = leavepay(&[
        "breakdown",
        "-p",
        "tests/data/plan.json",
        "--half-pay",
        "--paid-weeks",
        "8",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Paid Leave (8 weeks)"));
    assert!(stdout.contains("Primary (Gross): $3,000/month"));
}

/// Test after-tax weekly display
#[test]
fn breakdown_after_tax_weekly() {
    let output = leavepay(&[
        "breakdown",
        "-p",
        "tests/data/plan.json",
        "--after-tax",
        "-f",
        "weekly",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Non-Primary (Net):"));
    assert!(stdout.contains("/week"));
}

/// Test an unknown frequency shows monthly amounts
#[test]
fn breakdown_unknown_frequency_is_monthly() {
    let output = leavepay(&["breakdown", "-p", "tests/data/plan.json", "-f", "yearly"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Total: $9,108/month"));
}

/// Test negative government weeks clamp to zero
#[test]
fn breakdown_negative_government_weeks() {
    let output = leavepay(&["breakdown", "-p", "tests/data/plan.json", "--gov-weeks", "-3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Government Pay (0 weeks)"));
}

/// Test JSON output carries the tax panels
#[test]
fn breakdown_json() {
    let output = leavepay(&["breakdown", "-p", "tests/data/plan.json", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let phases = json["phases"].as_array().expect("phases array");
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[0]["title"], "Government Pay (21 weeks)");
    assert!(phases[0]["non_primary_tax"]["income_tax"].is_string());
}

/// Test a plan with no income is rejected
#[test]
fn breakdown_without_income_fails() {
    let output = leavepay(&["breakdown", "--full-pay", "--paid-weeks", "4"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("salary"), "stderr: {}", stderr);
}

/// Test the return-to-work view
#[test]
fn return_to_work_three_days() {
    let output = leavepay(&["breakdown", "-p", "tests/data/plan.json", "-r", "3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Return to Work (3 Days/Week)"));
    assert!(stdout.contains("Primary (Gross): $3,600/month"));
    assert!(stdout.contains("Total: $8,600/month"));
}

/// Test the four day view stays locked without the flag
#[test]
fn return_to_work_four_days_locked() {
    let output = leavepay(&["breakdown", "-p", "tests/data/plan.json", "-r", "4"]);

    assert!(!output.status.success());
}

/// Test the four day view with the unlock flag set
#[test]
fn return_to_work_four_days_unlocked() {
    let output = leavepay(&[
        "breakdown",
        "-p",
        "tests/data/plan.json",
        "-r",
        "4",
        "--flags",
        "tests/data/flags.json",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Return to Work (4 Days/Week)"));
    assert!(stdout.contains("Primary (Gross): $4,800/month"));
}

/// Test the calendar in the terminal
#[test]
fn calendar_text() {
    let output = leavepay(&[
        "calendar",
        "-p",
        "tests/data/plan.json",
        "--pay-day",
        "15",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("January 2026"));
    assert!(stdout.contains("August 2026"));
    assert!(stdout.contains("Total estimated income across this period"));
    assert!(stdout.contains("$300.28"));
    assert!(stdout.contains("15*"));
}

/// Test the timeline as CSV
#[test]
fn timeline_csv() {
    let output = leavepay(&["timeline", "-p", "tests/data/plan.json", "--csv"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("date,weekday,amount"));
    assert_eq!(lines.next(), Some("2026-01-01,Thu,300.28"));
    assert_eq!(stdout.lines().count(), 218);
    assert!(stdout.contains("2026-05-28,Thu,362.64"));
}

/// Test huge leave lengths clamp instead of crashing
#[test]
fn timeline_huge_paid_weeks() {
    let output = leavepay(&[
        "timeline",
        "--non-primary",
        "5000",
        "--full-pay",
        "--paid-weeks",
        "79228162514264337593543950335",
        "--start",
        "2026-01-01",
        "--csv",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout.lines().count(), 3788);
}

/// Test oversized salaries are rejected
#[test]
fn breakdown_oversized_salary_fails() {
    let output = leavepay(&[
        "breakdown",
        "--non-primary",
        "79228162514264337593543950335",
        "--full-pay",
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("must not exceed"), "stderr: {}", stderr);
}

/// Test the tax command
#[test]
fn tax_breakdown() {
    let output = leavepay(&["tax", "--gross", "10000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Gross: $10,000/month"));
    assert!(stdout.contains("Levy (2%): $200/month"));
    assert!(stdout.contains("Net: $7,568/month"));
}

/// Test the schema command
#[test]
fn schema_outputs() {
    let output = leavepay(&["schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("non_primary_monthly_gross"));

    let output = leavepay(&["schema", "fields"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("pay_rate"));
    assert!(stdout.contains("PayRate"));
}
