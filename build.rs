use std::env;
use std::fs;
use std::path::Path;

/// Variables que config.rs lee con option_env!
const KNOWN_KEYS: [&str; 5] = [
    "API_URL_DEVELOPMENT",
    "API_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "AUTH_PROBE_PATH",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(Path::new(".env")) else {
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim().trim_matches('"'));

        if !KNOWN_KEYS.contains(&key) {
            println!("cargo:warning=.env: clave desconocida '{}' ignorada", key);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
