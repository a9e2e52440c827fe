use std::env;
use std::fs;
use std::path::Path;

/// Keys read by `AppConfig::from_env`
const CONFIG_KEYS: [&str; 6] = [
    "GRAPHQL_URL_DEVELOPMENT",
    "GRAPHQL_URL_PRODUCTION",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "REVALIDATE_SESSION",
    "TOAST_DURATION_SECONDS",
];

/// Returns the reason a value is unusable for `key`, if any
fn check_value(key: &str, value: &str) -> Option<String> {
    match key {
        "GRAPHQL_URL_DEVELOPMENT" | "GRAPHQL_URL_PRODUCTION" => {
            if value.starts_with("http://") || value.starts_with("https://") {
                None
            } else {
                Some(format!("{} must be an http(s) URL, got '{}'", key, value))
            }
        }
        "ENABLE_LOGGING" | "REVALIDATE_SESSION" => match value {
            "true" | "false" => None,
            _ => Some(format!("{} must be true or false, got '{}'", key, value)),
        },
        "TOAST_DURATION_SECONDS" => match value.parse::<u32>() {
            Ok(_) => None,
            Err(_) => Some(format!("{} must be a whole number of seconds, got '{}'", key, value)),
        },
        _ => None,
    }
}

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using the built-in GraphQL endpoints. Copy .env.example to .env to configure them.");
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=.env could not be read: {}", e);
            return;
        }
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Ignoring malformed .env line: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }
        if let Some(problem) = check_value(key, value) {
            println!("cargo:warning={}; the default is used instead", problem);
            continue;
        }
        // Real environment wins over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
