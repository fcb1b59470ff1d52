use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, EN_LANG, ES_LANG, PT_LANG};

#[test]
fn test_check_reports_drift_without_writing() -> Result<()> {
    let test = CliTest::with_sources()?;

    assert_cmd_snapshot!(test.check_command());
    assert_eq!(test.read_file("frontend/templates/pseudo.lang")?, "");

    Ok(())
}

#[test]
fn test_check_clean_after_fix() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.fix_command().output()?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_unsorted_source() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.fix_command().output()?;
    test.write_file(
        "frontend/templates/es.lang",
        "locale = \"es\"\nfarewell = \"Hasta pronto\"\ngreeting = \"Hola, %(name)!\"\nquote = \"Di \\\"hola\\\"\\na todos\"\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_invalid_source_lines() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.write_file(
        "frontend/templates/en.lang",
        "farewell = \"See you soon\"\noops\ngreeting=\"Hello\"\n",
    )?;

    // Validation failures stop the run before anything is compared.
    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_missing_entries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_sources(
        &format!("{}extra = \"Only English\"\n", EN_LANG),
        ES_LANG,
        "locale = \"pt\"\n",
    )?;
    test.touch_artifacts()?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_missing_artifact_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_sources(EN_LANG, ES_LANG, PT_LANG)?;

    let root = test.root_pattern();
    insta::with_settings!({filters => vec![(root.as_str(), "[ROOT]")]}, {
        assert_cmd_snapshot!(test.check_command());
    });

    Ok(())
}

#[test]
fn test_check_with_root_flag() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.fix_command().output()?;

    let mut cmd = test.command();
    cmd.current_dir(std::env::temp_dir());
    cmd.arg("check").arg("--root").arg(test.root());

    let root = test.root_pattern();
    insta::with_settings!({filters => vec![(root.as_str(), "[ROOT]")]}, {
        assert_cmd_snapshot!(cmd);
    });

    Ok(())
}

#[test]
fn test_check_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langsyncrc.json",
        r#"{
            "languages": ["en", "es"],
            "langPath": "i18n/{lang}.lang",
            "jsonPath": "dist/{lang}.json",
            "typescriptPath": "dist/{lang}.ts"
        }"#,
    )?;
    test.write_file("i18n/en.lang", EN_LANG)?;
    test.write_file("i18n/es.lang", ES_LANG)?;
    for path in [
        "i18n/pseudo.lang",
        "dist/en.json",
        "dist/en.ts",
        "dist/es.json",
        "dist/es.ts",
        "dist/pseudo.json",
        "dist/pseudo.ts",
    ] {
        test.write_file(path, "")?;
    }
    test.fix_command().output()?;

    // Run from a subdirectory: the configuration is found by walking up.
    test.write_file("i18n/nested/.keep", "")?;
    let mut cmd = test.check_command();
    cmd.current_dir(test.root().join("i18n/nested"));

    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}
