use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn writes_template_and_sheet() -> Result<()> {
    let test = CliTest::with_file(
        "src/service_a.rs",
        r#"
let host = "${db.host:localhost}";
let timeout = "${timeout}";
"#,
    )?;

    let status = test.extract_command().status()?;
    assert_eq!(status.code(), Some(0));

    let template = test.read_file("template.properties")?;
    assert!(template.contains("#<replace-me>db.host=@db.host@"));
    assert!(template.contains("default values are: 'localhost'"));
    assert!(template.contains("found in: service_a"));
    assert!(template.contains("default values are: 'NONE SET!'"));
    assert!(template.contains("\ntimeout=@timeout@"));

    let sheet = test.read_file("template.csv")?;
    assert_eq!(
        sheet.lines().next().unwrap(),
        "Key,Scope,Default values,ref,Found in,Description"
    );
    assert!(sheet.contains("db.host,NOT_SPECIFIED,localhost,filled,service_a,"));
    assert!(sheet.contains("timeout,NOT_SPECIFIED,,FILL ME,service_a,"));

    Ok(())
}

#[test]
fn conflicting_defaults_are_merged_into_one_record() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.rs", r#"let h = "${db.host:localhost}";"#)?;
    test.write_file("src/b.rs", r#"let h = "${db.host:127.0.0.1}";"#)?;

    let status = test.extract_command().status()?;
    assert_eq!(status.code(), Some(0));

    let template = test.read_file("template.properties")?;
    // One block, both defaults surfaced.
    assert_eq!(template.matches("db.host=@db.host@").count(), 1);
    assert!(template.contains("127.0.0.1, localhost"));
    assert!(template.contains("found in: a, b"));

    Ok(())
}

#[test]
fn context_directive_carries_scope_and_description() -> Result<()> {
    let test = CliTest::with_file(
        "src/node_cfg.rs",
        "// propex-context scope=node \"per-node identifier\"\nlet id = \"${node.id}\";\n",
    )?;

    let status = test.extract_command().status()?;
    assert_eq!(status.code(), Some(0));

    let template = test.read_file("template.properties")?;
    assert!(template.contains("#context: 'NODE'"));
    assert!(template.contains("description: 'per-node identifier'"));

    Ok(())
}

#[test]
fn empty_scan_fails_with_exit_code_one() -> Result<()> {
    let test = CliTest::with_file("src/app.rs", r#"let greeting = "hello";"#)?;

    let status = test.extract_command().status()?;
    assert_eq!(status.code(), Some(1));

    // Artifacts still exist, just empty of records.
    assert_eq!(test.read_file("template.properties")?, "");

    Ok(())
}

#[test]
fn missing_source_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let status = test
        .extract_command()
        .args(["--source-root", "does-not-exist"])
        .status()?;
    assert_eq!(status.code(), Some(2));

    Ok(())
}

#[test]
fn environments_flag_expands_sheet_columns() -> Result<()> {
    let test = CliTest::with_file("src/app.rs", r#"let m = "${mode:debug}";"#)?;

    let status = test
        .extract_command()
        .args(["--environments", "dev,int,prod"])
        .status()?;
    assert_eq!(status.code(), Some(0));

    let sheet = test.read_file("template.csv")?;
    assert_eq!(
        sheet.lines().next().unwrap(),
        "Key,Scope,Default values,dev,int,prod,Found in,Description"
    );
    assert!(sheet.contains("mode,NOT_SPECIFIED,debug,filled,filled,filled,app,"));

    Ok(())
}

#[test]
fn json_format_writes_machine_readable_report() -> Result<()> {
    let test = CliTest::with_file("src/app.rs", r#"let m = "${mode:debug}";"#)?;

    let status = test
        .extract_command()
        .args(["--format", "json"])
        .status()?;
    assert_eq!(status.code(), Some(0));

    assert!(!test.has_file("template.properties"));
    let json: serde_json::Value = serde_json::from_str(&test.read_file("report.json")?)?;
    assert_eq!(json["records"][0]["key"], "mode");
    assert_eq!(json["records"][0]["defaultValues"][0], "debug");

    Ok(())
}

#[test]
fn config_ignores_are_honored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".propexrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("src/app.rs", r#"let m = "${kept.key}";"#)?;
    test.write_file("generated/gen.rs", r#"let m = "${dropped.key}";"#)?;

    let status = test.extract_command().status()?;
    assert_eq!(status.code(), Some(0));

    let template = test.read_file("template.properties")?;
    assert!(template.contains("kept.key"));
    assert!(!template.contains("dropped.key"));

    Ok(())
}

#[test]
fn out_dir_flag_redirects_artifacts() -> Result<()> {
    let test = CliTest::with_file("src/app.rs", r#"let m = "${mode:debug}";"#)?;

    let status = test
        .extract_command()
        .args(["--out-dir", "reports"])
        .status()?;
    assert_eq!(status.code(), Some(0));

    assert!(test.root().join("reports/template.properties").exists());
    assert!(test.root().join("reports/template.csv").exists());

    Ok(())
}

#[test]
fn relative_out_dir_resolves_against_the_source_root() -> Result<()> {
    let test = CliTest::with_file("proj/src/app.rs", r#"let m = "${mode:debug}";"#)?;

    let status = test
        .extract_command()
        .args(["--source-root", "proj", "--out-dir", "reports"])
        .status()?;
    assert_eq!(status.code(), Some(0));

    assert!(test.root().join("proj/reports/template.properties").exists());
    assert!(!test.root().join("reports").exists());

    Ok(())
}

#[test]
fn broken_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".propexrc.json", "{ not json")?;
    test.write_file("src/app.rs", r#"let m = "${mode}";"#)?;

    let status = test.extract_command().status()?;
    assert_eq!(status.code(), Some(2));

    Ok(())
}
