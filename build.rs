use std::env;
use std::fs;
use std::path::Path;

/// Variables que `config.rs` lee con `option_env!`
const CONFIG_VARS: &[&str] = &[
    "API_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "ATTACH_CREDENTIALS",
    "TOKEN_STORAGE_KEY",
];

fn main() {
    let env_file = Path::new(".env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        println!("cargo:rerun-if-changed=.env");

        for (key, value) in contents.lines().filter_map(parse_line) {
            // Las variables del entorno real tienen prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using the default API_URL.");
    }

    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// `KEY=VALUE`, ignorando comentarios, líneas vacías y comillas
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}
