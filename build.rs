use std::process::Command;

fn main() {
    // Capture the short git commit hash at build time; the CLI shows it in
    // --version output
    println!("cargo:rustc-env=GIT_HASH={}", git_short_hash());

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_short_hash() -> String {
    match Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .unwrap_or_else(|_| "unknown".to_string())
            .trim()
            .to_string(),
        _ => "unknown".to_string(),
    }
}
