//! Places the workspace `config.toml` next to the `site-tracker` binary,
//! where `shared::config::load_config` looks for it at startup.

use std::env;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

fn main() {
    println!("cargo:rerun-if-changed=../../{}", CONFIG_FILE);

    let Some(source) = workspace_config() else {
        println!(
            "cargo:warning={} not found in the workspace root, the embedded defaults will be used",
            CONFIG_FILE
        );
        return;
    };

    let Some(profile_dir) = profile_dir() else {
        println!("cargo:warning=Target profile directory not found, {} not copied", CONFIG_FILE);
        return;
    };

    let destination = profile_dir.join(CONFIG_FILE);
    if let Err(e) = std::fs::copy(&source, &destination) {
        panic!("Failed to copy {} to {}: {}", source.display(), destination.display(), e);
    }
}

/// `<workspace>/config.toml`, two levels above this crate
fn workspace_config() -> Option<PathBuf> {
    let config = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)?
        .join(CONFIG_FILE);
    config.is_file().then_some(config)
}

/// `target/<profile>`, found by walking up from `OUT_DIR`
/// (`target/<profile>/build/site-tracker-<hash>/out`)
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR")?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|dir| dir.ends_with(&profile))
        .map(Path::to_path_buf)
}
