fn main() {
    // GIT_SHA and BUILD_DATE from the environment win over git and date
    let git_sha = std::env::var("GIT_SHA").unwrap_or_else(|_| {
        std::process::Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    });

    println!("cargo:rustc-env=GIT_SHA={}", git_sha);

    let build_date = std::env::var("BUILD_DATE").unwrap_or_else(|_| {
        std::process::Command::new("date")
            .arg("+%Y-%m-%d")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    });

    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
