use std::{
    env::{self, VarError},
    error::Error,
    fs,
    path::Path,
};

#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;

#[allow(dead_code)]
#[path = "src/load.rs"]
mod load;

#[allow(dead_code)]
#[path = "src/validate.rs"]
mod validate;

fn env_lookup(key: &str) -> Result<String, VarError> {
    println!("cargo:rerun-if-env-changed={key}");
    env::var(key)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed={}", load::CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", load::EXAMPLE_CONFIG_FILE);

    let config = load::resolve_path(&env_lookup, |p| p.exists())?;
    if config.fallback {
        println!(
            "cargo:warning={} not found, using {}",
            load::CONFIG_FILE,
            load::EXAMPLE_CONFIG_FILE
        );
    }
    println!("cargo:rerun-if-changed={}", config.path.display());

    // Read, parse and validate. Errors never include configuration values.
    let contents = fs::read_to_string(&config.path)
        .map_err(|e| format!("failed to read {}: {e}", config.path.display()))?;
    let raw = load::load(&config.path, &contents, &env_lookup)?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, load::generate(&raw))?;
    Ok(())
}
