use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load compile-time settings from .env when present
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Variables already set in the environment win
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env to point the dashboard at your API.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-env-changed=API_BASE_URL");
    println!("cargo:rerun-if-env-changed=ENVIRONMENT");
    println!("cargo:rerun-if-env-changed=ENABLE_LOGGING");
}
