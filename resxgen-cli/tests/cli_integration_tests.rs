use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

const MAIN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <data name="CreateDate" xml:space="preserve">
    <value>Oldest</value>
  </data>
  <data name="CreateDateDescending" xml:space="preserve">
    <value>Newest</value>
  </data>
</root>
"#;

const DA: &str = r#"<root><data name="CreateDate"><value>OldestDa</value></data></root>"#;
const DA_DK: &str = r#"<root><data name="CreateDate"><value>OldestDaDK</value></data></root>"#;

fn project_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("MyApp");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("Strings.resx"), MAIN).unwrap();
    fs::write(root.join("Strings.da.resx"), DA).unwrap();
    fs::write(root.join("Strings.da-DK.resx"), DA_DK).unwrap();
    dir
}

#[test]
fn generate_writes_resource_manager_accessors_by_default() {
    let dir = project_dir();
    let input = dir.path().join("MyApp");
    let output = dir.path().join("out");

    Command::cargo_bin("resxgen")
        .unwrap()
        .args(["generate", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let generated = fs::read_to_string(output.join("MyApp.Strings.g.cs")).unwrap();
    assert!(generated.contains("namespace MyApp;"));
    assert!(generated.contains("internal static class Strings"));
    assert!(generated.contains("ResourceManager.GetString(nameof(CreateDate), CultureInfo)"));
    // No inline lookup requested, so no shared helper is emitted.
    assert!(!output.join("ResXGen.1030_6.g.cs").exists());
}

#[test]
fn generate_with_inline_lookup_emits_shared_helper() {
    let dir = project_dir();
    let input = dir.path().join("MyApp");
    let output = dir.path().join("out");
    let config = dir.path().join("resxgen.toml");
    fs::write(
        &config,
        r#"
        [project]
        name = "MyApp"
        root_namespace = "MyApp"
        use_inline_lookup = true
        "#,
    )
    .unwrap();

    Command::cargo_bin("resxgen")
        .unwrap()
        .args(["generate", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-c")
        .arg(&config)
        .assert()
        .success();

    let generated = fs::read_to_string(output.join("MyApp.Strings.g.cs")).unwrap();
    assert!(generated.contains(
        r#"GetString_1030_6("Oldest", "OldestDaDK", "OldestDa")"#
    ));

    let helper = fs::read_to_string(output.join("ResXGen.1030_6.g.cs")).unwrap();
    assert!(helper.contains("internal static partial class Helpers"));
    assert!(helper.contains("1030 => da_DK,"));
    assert!(helper.contains("6 => da,"));
    assert!(helper.contains("_ => fallback"));
}

#[test]
fn duplicate_keys_report_a_warning_on_stderr() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("MyApp");
    fs::create_dir_all(&input).unwrap();
    fs::write(
        input.join("Strings.resx"),
        r#"<root>
  <data name="A"><value>one</value></data>
  <data name="A"><value>two</value></data>
</root>"#,
    )
    .unwrap();
    let output = dir.path().join("out");

    let assert = Command::cargo_bin("resxgen")
        .unwrap()
        .args(["generate", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("RESXGEN001"));
    assert!(stderr.contains("ignored added member 'A'"));
}

#[test]
fn inspect_lists_groups_and_combinations() {
    let dir = project_dir();
    let input = dir.path().join("MyApp");

    let assert = Command::cargo_bin("resxgen")
        .unwrap()
        .args(["inspect", "-i"])
        .arg(&input)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("Strings.resx"));
    assert!(stdout.contains("(da-DK)"));
    assert!(stdout.contains("Distinct culture combinations: 1"));
    assert!(stdout.contains("[da-DK, da]"));
}

#[test]
fn utf16_resource_files_are_decoded() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("MyApp");
    fs::create_dir_all(&input).unwrap();

    let mut bytes: Vec<u8> = vec![0xFF, 0xFE];
    for unit in "<root><data name=\"A\"><value>wide</value></data></root>".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(input.join("Strings.resx"), bytes).unwrap();
    let output = dir.path().join("out");

    Command::cargo_bin("resxgen")
        .unwrap()
        .args(["generate", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let generated = fs::read_to_string(output.join("MyApp.Strings.g.cs")).unwrap();
    assert!(generated.contains("similar to wide"));
}
