use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let run = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("Created .keydiffrc.json"));
    assert!(test.root().join(".keydiffrc.json").exists());

    let content = test.read_file(".keydiffrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localesDir"], "src/locales");
    assert_eq!(parsed["reference"], "en");
    assert_eq!(parsed["localeFile"], "src/locales/en.json");
    assert!(content.contains("\n  \"sourceRoot\": \"src\""));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keydiffrc.json", "{}")?;

    let run = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("Error: .keydiffrc.json already exists"));
    assert_eq!(test.read_file(".keydiffrc.json")?, "{}");

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

    test.write_file("src/locales/en.json", r#"{ "a": "A" }"#)?;
    test.write_file("src/locales/fr.json", r#"{ "a": "Á" }"#)?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let compare = run(test.compare_command())?;
    assert_eq!(compare.code, Some(0), "stderr: {}", compare.stderr);

    let usage = run(test.usage_command())?;
    assert_eq!(usage.code, Some(0), "stderr: {}", usage.stderr);

    Ok(())
}
