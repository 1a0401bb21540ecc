use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], json!([]));
    assert_eq!(
        parsed["ignores"],
        json!(["**/node_modules/**", "**/.git/**", "**/target/**"])
    );
    assert_eq!(parsed["extensions"], json!({}));

    assert!(
        content.contains("\n  \"includes\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .comscanrc.json\n");
    assert!(test.root().join(".comscanrc.json").exists());

    let content = test.read_file(".comscanrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".comscanrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stderr, "Error: .comscanrc.json already exists\n");
    assert_eq!(test.read_file(".comscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    test.write_file("src/app.js", "// hello\n")?;
    test.write_file("node_modules/dep/index.js", "// vendored\n")?;

    let output = run(test.scan_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("src/app.js"));
    assert!(!output.stdout.contains("node_modules"));

    Ok(())
}
