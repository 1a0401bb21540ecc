use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, run, run_with_stdin};

#[test]
fn test_extract_file_text() -> Result<()> {
    let test = CliTest::with_file(
        "lib/util.cpp",
        "/**\n * Adds.\n**/\nint add(int a, int b) { return a + b; } // sum\n",
    )?;

    let output = run({
        let mut cmd = test.extract_command();
        cmd.arg("lib/util.cpp");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    lib/util.cpp
      1-3  *\n * Adds.\n*
      4     sum
    ");

    Ok(())
}

#[test]
fn test_extract_from_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = run_with_stdin(
        {
            let mut cmd = test.extract_command();
            cmd.args(["-", "--language", "typescript", "--format", "json"]);
            cmd
        },
        "const url = \"http://x\"; // link\n",
    )?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.json()?,
        json!({
            "files": [{
                "path": "<stdin>",
                "language": "typescript",
                "comments": [
                    { "content": " link", "location": 1, "isMultiline": false }
                ]
            }],
            "issues": []
        })
    );

    Ok(())
}

#[test]
fn test_extract_stdin_requires_language() -> Result<()> {
    let test = CliTest::new()?;

    let output = run_with_stdin(
        {
            let mut cmd = test.extract_command();
            cmd.arg("-");
            cmd
        },
        "// hi\n",
    )?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert!(
        output
            .stderr
            .contains("--language is required when reading from stdin")
    );

    Ok(())
}

#[test]
fn test_extract_unknown_extension() -> Result<()> {
    let test = CliTest::with_file("script.py", "# python\n")?;

    let output = run({
        let mut cmd = test.extract_command();
        cmd.arg("script.py");
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .contains("Cannot detect the language of script.py, use --language")
    );

    Ok(())
}

#[test]
fn test_extract_unknown_extension_with_language() -> Result<()> {
    let test = CliTest::with_file("shader.glsl", "void main() {} // entry\n")?;

    let output = run({
        let mut cmd = test.extract_command();
        cmd.args(["shader.glsl", "--language", "c", "--format", "json"]);
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    let json = output.json()?;
    assert_eq!(json["files"][0]["language"], "c");
    assert_eq!(json["files"][0]["comments"][0]["content"], " entry");

    Ok(())
}

#[test]
fn test_extract_unterminated_comment() -> Result<()> {
    let test = CliTest::with_file("bad.m", "// ok\n/* open\n")?;

    let output = run({
        let mut cmd = test.extract_command();
        cmd.args(["bad.m", "--format", "json"]);
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.json()?,
        json!({
            "files": [],
            "issues": [{
                "path": "bad.m",
                "rule": "unterminated-comment",
                "severity": "error",
                "message": "unterminated multi-line comment"
            }]
        })
    );

    Ok(())
}

#[test]
fn test_extract_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.extract_command();
        cmd.arg("missing.c");
        cmd
    })?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Failed to read file: missing.c"));

    Ok(())
}
