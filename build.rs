use std::env;
use std::fs;
use std::path::Path;

const CONTRACT_KEY: &str = "CONTRACT_ADDRESS";

fn main() {
    // Load variables from .env if present
    let env_file = Path::new(".env");
    let mut contract_in_dotenv = false;

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

                    if key == CONTRACT_KEY && !value.is_empty() {
                        contract_in_dotenv = true;
                    }

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default values. Copy .env.example to .env and set CONTRACT_ADDRESS.");
    }

    let contract_in_env = env::var(CONTRACT_KEY).map_or(false, |v| !v.trim().is_empty());
    if !contract_in_env && !contract_in_dotenv {
        println!("cargo:warning=CONTRACT_ADDRESS is not set in the environment or .env, the app will talk to the zero address.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-env-changed={}", CONTRACT_KEY);
}
