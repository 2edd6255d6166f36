#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a CSV file with the given content
pub fn create_test_csv(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// Build `brand,rating` CSV content from pairs
pub fn ratings_csv(rows: &[(&str, &str)]) -> String {
    let mut content = String::from("brand,rating\n");
    for (brand, rating) in rows {
        content.push_str(&format!("{},{}\n", brand, rating));
    }
    content
}

/// Product listing with extra columns around brand and rating
pub fn create_products_csv() -> String {
    r#"name,brand,price,rating
iphone 15 pro,apple,999,4.9
galaxy s23 ultra,samsung,1199,4.8
redmi note 12,xiaomi,199,4.6
iphone 14,apple,799,4.7
galaxy a54,samsung,349,4.2
"#
    .to_string()
}

/// Helper to run the workmate binary
pub fn workmate_cmd() -> Command {
    Command::cargo_bin("workmate").unwrap()
}

/// Setup test environment with temporary directory
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub home_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let input_dir = temp_dir.path().join("input");
        let home_dir = temp_dir.path().join("home");

        fs::create_dir_all(&input_dir)?;
        fs::create_dir_all(&home_dir)?;

        Ok(Self {
            temp_dir,
            input_dir,
            home_dir,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        create_test_csv(&self.input_dir, name, content)
    }

    /// Command isolated from the user's configuration and log settings
    pub fn cmd(&self) -> Command {
        let mut cmd = workmate_cmd();
        cmd.env("WORKMATE_HOME", &self.home_dir)
            .env("NO_COLOR", "1")
            .env_remove("WORKMATE_CONFIG")
            .env_remove("WORKMATE_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}
