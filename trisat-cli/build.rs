use std::{env, path::Path, process::Command};

/// Trimmed stdout of a successful command.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|result| result.status.success())?;

    String::from_utf8(output.stdout)
        .ok()
        .map(|stdout| stdout.trim().to_owned())
}

fn main() {
    let rustc = env::var("RUSTC").unwrap();

    let rustc_version =
        command_output(&rustc, &["--version"]).expect("Failed to query rustc version");

    let git_version = if Path::new("../.git").exists() {
        command_output(
            "git",
            &[
                "describe",
                "--tags",
                "--match=v[0-9]*",
                "--dirty=-d",
                "--always",
            ],
        )
    } else {
        None
    };

    let version = match git_version {
        Some(version) => version.trim_start_matches('v').to_owned(),
        None => env::var("CARGO_PKG_VERSION").unwrap(),
    };

    println!("cargo:rustc-env=TRISAT_VERSION={}", version);
    println!("cargo:rustc-env=TRISAT_RUSTC_VERSION={}", rustc_version);
    println!(
        "cargo:rustc-env=TRISAT_PROFILE={}",
        env::var("PROFILE").unwrap()
    );
}
