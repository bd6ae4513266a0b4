use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "src/locales/en.json",
        r#"{
  "home": { "title": "Home", "subtitle": "Welcome" },
  "nav": { "about": "About" }
}"#,
    )?;
    test.write_file(
        "src/app/page.tsx",
        r#"
export default function Page() {
    const { t } = useTranslation();
    return (
        <main>
            <h1>{t("home.title")}</h1>
            <p>{t('home.cta.start')}</p>
            <span>{myFunction_t("ignored.key")}</span>
        </main>
    );
}
"#,
    )?;
    test.write_file(
        "src/components/Footer.jsx",
        "export const Footer = () => <footer>{t(`footer.copyright`)}</footer>;",
    )?;
    Ok(test)
}

#[test]
fn test_usage_reports_and_writes_missing_file() -> Result<()> {
    let test = project()?;

    let run = run(test.usage_command())?;

    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Scanned 2 source files in src"));
    assert!(run.stdout.contains("  Translation keys in code: 3"));
    assert!(run.stdout.contains("  Translation keys in locale: 3"));
    assert!(run.stdout.contains("  Missing translations: 2"));
    assert!(run.stdout.contains("  Unused translations: 2"));
    assert!(run.stdout.contains("  - home.cta.start\n"));
    assert!(run.stdout.contains("Footer.jsx"));
    assert!(run.stdout.contains("Unused translations (2):\n  - home.subtitle\n  - nav.about\n"));
    assert!(!run.stdout.contains("ignored.key"));

    insta::assert_snapshot!(test.read_file("missing_translations.json")?, @r#"
    {
      "footer": {
        "copyright": ""
      },
      "home": {
        "cta": {
          "start": ""
        }
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_usage_all_keys_present() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/en.json", r#"{ "a": { "b": "B" } }"#)?;
    test.write_file("src/index.ts", r#"console.log(t("a.b"));"#)?;

    let run = run(test.usage_command())?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("All translation keys found in locale file"));
    assert!(!test.exists("missing_translations.json"));

    Ok(())
}

#[test]
fn test_usage_custom_paths_and_extensions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/i18n/en.json", r#"{ "known": "Known" }"#)?;
    test.write_file("web/App.vue", r#"<p>{{ t("vue.only") }}</p>"#)?;
    test.write_file("web/main.ts", r#"t("ts.only")"#)?;

    let run = run({
        let mut cmd = test.usage_command();
        cmd.args(["--src", "web", "--locale", "web/i18n/en.json", "--ext", ".vue"]);
        cmd.args(["--output-dir", "reports"]);
        cmd
    })?;

    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);
    let written: Value = serde_json::from_str(&test.read_file("reports/missing_translations.json")?)?;
    assert_eq!(written, json!({ "vue": { "only": "" } }));

    Ok(())
}

#[test]
fn test_usage_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keydiffrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file("src/locales/en.json", "{}")?;
    test.write_file("src/app.tsx", r#"t("app.title")"#)?;
    test.write_file("src/generated/types.ts", r#"t("generated.key")"#)?;

    let run = run(test.usage_command())?;

    assert!(run.stdout.contains("Scanned 1 source file in src"));
    let written: Value = serde_json::from_str(&test.read_file("missing_translations.json")?)?;
    assert_eq!(written, json!({ "app": { "title": "" } }));

    Ok(())
}

#[test]
fn test_usage_verbose_lists_files() -> Result<()> {
    let test = project()?;

    let run = run({
        let mut cmd = test.usage_command();
        cmd.arg("-v");
        cmd
    })?;

    assert!(run.stdout.contains("page.tsx: 2 keys"));
    assert!(run.stdout.contains("Footer.jsx: 1 key\n"));

    Ok(())
}

#[test]
fn test_usage_unreadable_file_is_skipped() -> Result<()> {
    let test = project()?;
    test.write_file("src/broken.ts", [0xff_u8, 0xfe, 0xfd])?;

    let lenient = run(test.usage_command())?;

    assert_eq!(lenient.code, Some(0));
    assert!(lenient.stderr.contains("warning: 1 file skipped (use -v for details)"));
    assert!(!lenient.stderr.contains("broken.ts"));
    assert!(lenient.stdout.contains("  Missing translations: 2"));

    let strict = run({
        let mut cmd = test.usage_command();
        cmd.arg("--strict");
        cmd
    })?;
    assert_eq!(strict.code, Some(1));

    let verbose = run({
        let mut cmd = test.usage_command();
        cmd.arg("--verbose");
        cmd
    })?;
    assert!(verbose.stderr.contains("warning: skipped"));
    assert!(verbose.stderr.contains("broken.ts"));

    Ok(())
}

#[test]
fn test_usage_missing_locale_aborts() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", r#"t("a")"#)?;

    let run = run(test.usage_command())?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("Error: Could not analyze"));
    assert!(!test.exists("missing_translations.json"));

    Ok(())
}
