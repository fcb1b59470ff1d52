use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, EN_LANG, ES_LANG, PT_LANG};

const PSEUDO_LANG: &str = r#"farewell = "(S33 y0u 500n)"
greeting = "(H3110, %(name)!)"
locale = "pseudo"
quote = "(Say \"hi\"\n70 a11)"
"#;

const PSEUDO_JSON: &str = "{
\t\"farewell\": \"(S33 y0u 500n)\",
\t\"greeting\": \"(H3110, %(name)!)\",
\t\"locale\": \"pseudo\",
\t\"quote\": \"(Say \\\"hi\\\"\\n70 a11)\"
}";

const PT_TS: &str = r#"// generated by langsync. DO NOT EDIT.
const translations: { [key: string]: string; } = {
  farewell: "At\u00e9 logo",
  greeting: "Ol\u00e1, %(name)!",
  locale: "pt",
  quote: "Diga \"oi\"\npara todos",
};

export {translations as default};"#;

const BADGE: &str = r#"{
  "en": {"name": "Coder", "description": "Solved \"many\" problems"},
  "es": {"name": "Programador", "description": "Resolvió muchos problemas"},
  "pt": {"name": "Programador", "description": "Resolveu muitos problemas"}
}"#;

#[test]
fn test_fix_writes_every_artifact() -> Result<()> {
    let test = CliTest::with_sources()?;

    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(test.read_file("frontend/templates/pseudo.lang")?, PSEUDO_LANG);
    assert_eq!(test.read_file("frontend/www/js/omegaup/lang.pseudo.json")?, PSEUDO_JSON);
    assert_eq!(test.read_file("frontend/www/js/omegaup/lang.pt.ts")?, PT_TS);
    assert_eq!(
        test.read_file("frontend/www/js/omegaup/lang.es.json")?,
        "{\n\t\"farewell\": \"Hasta pronto\",\n\t\"greeting\": \"Hola, %(name)!\",\n\t\"locale\": \"es\",\n\t\"quote\": \"Di \\\"hola\\\"\\na todos\"\n}"
    );
    // Sources that were already canonical are left untouched.
    assert_eq!(test.read_file("frontend/templates/en.lang")?, EN_LANG);

    Ok(())
}

#[test]
fn test_fix_twice_is_stable() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.fix_command().output()?;
    let first = test.read_file("frontend/www/js/omegaup/lang.en.ts")?;

    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(test.read_file("frontend/www/js/omegaup/lang.en.ts")?, first);

    Ok(())
}

#[test]
fn test_fix_dry_run_does_not_write() -> Result<()> {
    let test = CliTest::with_sources()?;

    assert_cmd_snapshot!(test.fix_command().arg("--dry-run"));
    assert_eq!(test.read_file("frontend/templates/pseudo.lang")?, "");

    Ok(())
}

#[test]
fn test_fix_merges_badges() -> Result<()> {
    let test = CliTest::new()?;
    test.write_sources(
        &format!("badge_coder_name = \"Stale\"\n{}", EN_LANG),
        ES_LANG,
        PT_LANG,
    )?;
    test.touch_artifacts()?;
    test.write_file("frontend/badges/coder/localizations.json", BADGE)?;

    assert_cmd_snapshot!(test.fix_command());
    let en = test.read_file("frontend/templates/en.lang")?;
    assert!(en.starts_with(
        "badge_coder_description = \"Solved \\\"many\\\" problems\"\nbadge_coder_name = \"Coder\"\nfarewell = "
    ));
    let es = test.read_file("frontend/templates/es.lang")?;
    assert!(es.starts_with(
        "badge_coder_description = \"Resolvió muchos problemas\"\nbadge_coder_name = \"Programador\"\n"
    ));
    let pseudo = test.read_file("frontend/templates/pseudo.lang")?;
    assert!(pseudo.starts_with("badge_coder_description = \"(S01v3d \\\"many\\\" pr0b13m5)\"\n"));

    Ok(())
}

#[test]
fn test_fix_does_not_write_invalid_sources() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.write_file("frontend/templates/es.lang", "locale = \"es\"\nbroken\n")?;

    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(test.read_file("frontend/templates/pseudo.lang")?, "");

    Ok(())
}

#[test]
fn test_fix_broken_badge_is_an_error() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.write_file(
        "frontend/badges/coder/localizations.json",
        r#"{"en": {"name": "Coder", "description": "Only English"}}"#,
    )?;

    assert_cmd_snapshot!(test.fix_command());
    assert_eq!(test.read_file("frontend/templates/pseudo.lang")?, "");

    Ok(())
}

#[test]
fn test_fix_ignores_badge_languages_that_are_not_configured() -> Result<()> {
    let test = CliTest::with_sources()?;
    test.write_file(
        "frontend/badges/coder/localizations.json",
        r#"{
  "en": {"name": "Coder", "description": "Solved problems"},
  "es": {"name": "Programador", "description": "Resolvió problemas"},
  "pt": {"name": "Programador", "description": "Resolveu problemas"},
  "fr": {"name": "Codeur"}
}"#,
    )?;

    let output = test.fix_command().output()?;

    assert!(output.status.success());
    let pt = test.read_file("frontend/templates/pt.lang")?;
    assert!(pt.starts_with(
        "badge_coder_description = \"Resolveu problemas\"\nbadge_coder_name = \"Programador\"\n"
    ));

    Ok(())
}
