use crate::prelude::*;
use error::Result;

pub mod error;

/// Library feature combinations checked on top of the default build.
const FEATURE_CHECKS: &[(&str, &[&str])] = &[
    ("nice_utils_core", &["--no-default-features"]),
    ("nice_utils_host", &["--features", "mock"]),
];

/// Code quality checks
#[derive(Debug, clap::Parser)]
#[command(
    long_about = "Run code quality checks including formatting, compilation, linting, and tests.

This command runs the following checks in order:

1. cargo fmt - Code formatting (auto-fix with --fix)
2. cargo check - Compilation check
3. cargo check per feature set - core without `random`, host with `mock`
4. cargo clippy - Linting with all warnings treated as errors
5. cargo test - Run all tests including doctests"
)]
pub struct LintCommand {
    /// Auto-fix formatting issues
    #[arg(long)]
    pub fix: bool,
}

pub async fn run(command: LintCommand, global: crate::Global) -> Result<()> {
    error::require_command("cargo", "Required for Rust development: https://rustup.rs/")?;

    if !global.is_silent() {
        aprintln!("{}", p_b("Running code quality checks..."));
        aprintln!();
    }

    let mut all_passed = true;

    if !run_cargo_fmt(&command, &global).await? {
        all_passed = false;
    }

    if !run_cargo_check(&global).await? {
        all_passed = false;
    }

    if !run_feature_checks(&global).await? {
        all_passed = false;
    }

    if !run_cargo_clippy(&global).await? {
        all_passed = false;
    }

    if !run_cargo_test(&global).await? {
        all_passed = false;
    }

    aprintln!();
    if all_passed {
        aprintln!("{} {}", p_g("✅"), p_g("All checks passed!"));
        Ok(())
    } else {
        aprintln!("{} {}", p_r("❌"), p_r("Some checks failed"));
        aprintln!();
        if !global.is_silent() {
            aprintln!("{}", p_b("Quick fixes:"));
            aprintln!("  • {} - Format code", p_c("cargo xtask lint --fix"));
            aprintln!("  • {} - Auto-fix clippy issues", p_c("cargo clippy --fix"));
            aprintln!("  • {} - Check compilation", p_c("cargo check"));
        }
        Err(error::LintError::ChecksFailed)
    }
}

async fn run_cargo_fmt(command: &LintCommand, global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo fmt..."));
    }

    // First check if formatting is needed
    let check_output = tokio::process::Command::new("cargo")
        .args(["fmt", "--check"])
        .output()
        .await?;

    if check_output.status.success() {
        if !global.is_silent() {
            aprintln!("{} {}", p_g("✅"), "Code formatting is correct");
        }
        return Ok(true);
    }

    if command.fix {
        if global.is_verbose() {
            aprintln!(
                "{} {}",
                p_y("⚠️"),
                "Code formatting issues found. Auto-fixing..."
            );
        }

        let fmt_status = tokio::process::Command::new("cargo")
            .arg("fmt")
            .status()
            .await?;

        if fmt_status.success() {
            if !global.is_silent() {
                aprintln!("{} {}", p_g("✅"), "Code formatted");
            }
            Ok(true)
        } else {
            aprintln!("{} {}", p_r("❌"), "cargo fmt failed");
            Ok(false)
        }
    } else {
        aprintln!(
            "{} {}",
            p_r("❌"),
            "Code formatting check failed. Run with --fix to auto-format"
        );
        Ok(false)
    }
}

/// One `cargo` invocation and the messages printed around it.
struct CargoStep<'a> {
    label: &'a str,
    args: &'a [&'a str],
    trailing: &'a [&'a str],
    passed: &'a str,
    failed: &'a str,
    hint: Option<&'a str>,
}

impl CargoStep<'_> {
    async fn run(&self, global: &crate::Global) -> Result<bool> {
        if !global.is_silent() {
            aprintln!("{} {}", p_b("🔧"), p_b(&format!("Running {}...", self.label)));
        }

        let mut cmd = tokio::process::Command::new("cargo");
        cmd.args(self.args);

        if !global.is_verbose() {
            cmd.arg("--quiet");
        }

        cmd.args(self.trailing);

        if cmd.status().await?.success() {
            if !global.is_silent() {
                aprintln!("{} {}", p_g("✅"), self.passed);
            }
            return Ok(true);
        }

        aprintln!("{} {}", p_r("❌"), self.failed);
        if let Some(hint) = self.hint {
            aprintln!("{}", p_r(hint));
        }
        Ok(false)
    }
}

async fn run_cargo_check(global: &crate::Global) -> Result<bool> {
    CargoStep {
        label: "cargo check",
        args: &["check", "--all-targets"],
        trailing: &[],
        passed: "Cargo check passed",
        failed: "Cargo check failed",
        hint: Some("Please fix compilation errors before proceeding"),
    }
    .run(global)
    .await
}

async fn run_feature_checks(global: &crate::Global) -> Result<bool> {
    let mut passed = true;

    for &(package, flags) in FEATURE_CHECKS {
        let label = format!("cargo check -p {package} {}", flags.join(" "));
        let args: Vec<&str> = ["check", "-p", package]
            .into_iter()
            .chain(flags.iter().copied())
            .collect();
        let ok = format!("{package} builds with {}", flags.join(" "));
        let failed = format!("{package} fails with {}", flags.join(" "));

        let step = CargoStep {
            label: &label,
            args: &args,
            trailing: &[],
            passed: &ok,
            failed: &failed,
            hint: None,
        };
        if !step.run(global).await? {
            passed = false;
        }
    }

    Ok(passed)
}

async fn run_cargo_clippy(global: &crate::Global) -> Result<bool> {
    let passed = CargoStep {
        label: "cargo clippy",
        args: &["clippy", "--all-targets", "--all-features"],
        trailing: &["--", "-D", "warnings"],
        passed: "Clippy checks passed",
        failed: "Clippy checks failed",
        hint: Some("Please fix clippy warnings before proceeding"),
    }
    .run(global)
    .await?;

    if !passed && !global.is_silent() {
        aprintln!(
            "{} Run {} to auto-fix some issues",
            p_b("Tip:"),
            p_c("cargo clippy --fix")
        );
    }
    Ok(passed)
}

async fn run_cargo_test(global: &crate::Global) -> Result<bool> {
    CargoStep {
        label: "cargo test",
        args: &["test", "--workspace", "--all-features"],
        trailing: &[],
        passed: "All tests passed",
        failed: "Tests failed",
        hint: Some("Please fix failing tests before proceeding"),
    }
    .run(global)
    .await
}
