//! Workspace task runner for the browser build.
//!
//! The site crate targets `wasm32-unknown-unknown` and is bundled by
//! `trunk`, so the everyday loops live here instead of in shell scripts:
//!
//! ```text
//! cargo xtask setup-web    # install the wasm target and trunk
//! cargo xtask dev          # trunk serve with rebuild-on-change
//! cargo xtask build-web    # release bundle into target/trunk-dist
//! cargo xtask check-web    # cargo check natively and for wasm32
//! cargo xtask verify       # fmt, clippy, tests, wasm check
//! ```

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

const WASM_TARGET: &str = "wasm32-unknown-unknown";
const SITE_PACKAGE: &str = "site";
const SITE_CARGO_FEATURE: &str = "csr";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(task) = args.first().map(String::as_str) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let result = match task {
        "setup-web" => setup_web(),
        "dev" => dev(&args[1..]),
        "build-web" => build_web(),
        "check-web" => check_web(),
        "verify" => verify(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown task `{other}`")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("usage: cargo xtask <task>");
    eprintln!();
    eprintln!("tasks:");
    eprintln!("  setup-web   install the wasm32 target and trunk");
    eprintln!("  dev         run `trunk serve` for the site crate");
    eprintln!("              (extra args are passed to trunk, e.g. --port 9090)");
    eprintln!("  build-web   build the release bundle into target/trunk-dist");
    eprintln!("  check-web   cargo check the site natively and for wasm32");
    eprintln!("  verify      fmt --check, clippy, tests, then check-web");
}

fn setup_web() -> Result<(), String> {
    run(Command::new("rustup").args(["target", "add", WASM_TARGET]))?;
    if command_available("trunk") {
        println!("trunk already installed");
    } else {
        run(Command::new("cargo").args(["install", "trunk", "--locked"]))?;
    }
    Ok(())
}

fn dev(extra: &[String]) -> Result<(), String> {
    ensure_command("trunk", "run `cargo xtask setup-web` first")?;
    ensure_wasm_target()?;

    let mut command = Command::new("trunk");
    command.arg("serve").args(extra).current_dir(site_dir()?);
    run(&mut command)
}

fn build_web() -> Result<(), String> {
    ensure_command("trunk", "run `cargo xtask setup-web` first")?;
    ensure_wasm_target()?;

    let dist = workspace_root()?.join("target").join("trunk-dist");
    let mut command = Command::new("trunk");
    command
        .args(["build", "--release", "--dist"])
        .arg(&dist)
        .current_dir(site_dir()?);
    run(&mut command)?;
    println!("bundle written to {}", dist.display());
    Ok(())
}

fn check_web() -> Result<(), String> {
    ensure_wasm_target()?;

    run(Command::new("cargo").args([
        "check",
        "--package",
        SITE_PACKAGE,
        "--features",
        SITE_CARGO_FEATURE,
    ]))?;
    run(Command::new("cargo").args([
        "check",
        "--package",
        SITE_PACKAGE,
        "--features",
        SITE_CARGO_FEATURE,
        "--target",
        WASM_TARGET,
    ]))
}

fn verify() -> Result<(), String> {
    run(Command::new("cargo").args(["fmt", "--all", "--check"]))?;
    run(Command::new("cargo").args([
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ]))?;
    run(Command::new("cargo").args(["test", "--workspace"]))?;
    check_web()
}

fn site_dir() -> Result<PathBuf, String> {
    Ok(workspace_root()?.join("crates").join(SITE_PACKAGE))
}

fn workspace_root() -> Result<PathBuf, String> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "xtask manifest dir has no parent".to_string())
}

fn ensure_wasm_target() -> Result<(), String> {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .map_err(|err| format!("failed to run rustup: {err}"))?;
    let installed = String::from_utf8_lossy(&output.stdout);
    if installed.lines().any(|line| line.trim() == WASM_TARGET) {
        Ok(())
    } else {
        Err(format!(
            "{WASM_TARGET} target missing; run `cargo xtask setup-web`"
        ))
    }
}

fn ensure_command(name: &str, hint: &str) -> Result<(), String> {
    if command_available(name) {
        Ok(())
    } else {
        Err(format!("`{name}` not found; {hint}"))
    }
}

fn command_available(name: &str) -> bool {
    Command::new(name)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn run(command: &mut Command) -> Result<(), String> {
    let rendered = render(command);
    println!("+ {rendered}");
    let status = command
        .status()
        .map_err(|err| format!("failed to spawn `{rendered}`: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("`{rendered}` exited with {status}"))
    }
}

fn render(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_root_is_parent_of_xtask() {
        let root = workspace_root().unwrap();
        assert!(root.join("Cargo.toml").exists());
        assert!(root.join("xtask").join("Cargo.toml").exists());
    }

    #[test]
    fn site_dir_points_at_site_crate() {
        let dir = site_dir().unwrap();
        assert!(dir.ends_with(Path::new("crates").join(SITE_PACKAGE)));
    }

    #[test]
    fn render_joins_program_and_args() {
        let mut command = Command::new("cargo");
        command.args(["check", "--package", "site"]);
        assert_eq!(render(&command), "cargo check --package site");
    }
}
