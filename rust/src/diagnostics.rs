use std::process::Command;

/// Print which config tools are reachable, as `cargo:warning` lines.
/// Meant for debugging a failing build script, not for normal runs.
pub fn check_requirements(packages: &[&str]) {
    println!("cargo:warning=Probe Diagnostics:");

    if let Ok(output) = Command::new("pkg-config").arg("--version").output() {
        let version = String::from_utf8_lossy(&output.stdout);
        println!("cargo:warning=  pkg-config: Found ({})", version.trim());
    } else {
        println!("cargo:warning=  pkg-config: NOT FOUND");
    }

    for package in packages {
        let tool = format!("{}-config", package);
        if let Ok(output) = Command::new(&tool).arg("--version").output() {
            let version = String::from_utf8_lossy(&output.stdout);
            println!(
                "cargo:warning=  {}: Found ({})",
                tool,
                version.lines().next().unwrap_or("unknown").trim()
            );
        } else {
            println!("cargo:warning=  {}: NOT FOUND", tool);
        }
    }
}
