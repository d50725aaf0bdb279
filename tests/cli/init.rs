use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .tidumprc.json"));

    let content = test.read_file(".tidumprc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed.get("marker"), Some(&Value::from("EASYTR")));
    assert!(parsed.get("extensions").is_some_and(Value::is_array));
    assert!(parsed.get("stripQuotes").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tidumprc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".tidumprc.json already exists"));
    assert_eq!(test.read_file(".tidumprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/main.cpp", "EASYTR(\"Hello\");\n")?;

    let output = test.dump_command().output()?;
    assert!(
        output.status.success(),
        "Dump should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("text_ids.json").exists());

    Ok(())
}
