use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    let content = test.read_file(".langsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["languages"], serde_json::json!(["en", "es", "pt"]));
    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["langPath"], "frontend/templates/{lang}.lang");
    assert_eq!(parsed["auxiliaryPrefix"], "badge");

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));
    assert_eq!(test.read_file(".langsyncrc.json")?, "{}");

    Ok(())
}
