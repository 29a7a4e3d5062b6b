use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_list_props() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.html",
        r#"<html><body>
             <a data-i18n="[title]link_title;link_text">x</a>
             <button data-i18n="ns:ok_button"></button>
           </body></html>"#,
    )?;
    test.write_file(
        "src/views/other.html",
        r#"<span data-i18n="ns:ok_button"></span>"#,
    )?;

    let output = test
        .extract_command()
        .args(["--dest", "build/prop_list.txt", "src/**/*.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("File \"build/prop_list.txt\" created."));
    assert_eq!(
        test.read_file("build/prop_list.txt")?,
        "link_text\nlink_title\nns:ok_button"
    );

    Ok(())
}

#[test]
fn test_extract_spring_props_from_script() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "var a = i18n.t('ns:main_ok_button');\n// ns:main_cancel\nvar b = other:thing;",
    )?;

    let output = test
        .extract_command()
        .args([
            "--action",
            "spring_props",
            "--namespace",
            "ns",
            "--dest",
            "build/spring_props.json",
            "src/app.js",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        test.read_file("build/spring_props.json")?,
        r##"{
    "ns:main_cancel": "#springMessage( 'ns:main_cancel' )",
    "ns:main_ok_button": "#springMessage( 'ns:main_ok_button' )"
}"##
    );

    Ok(())
}

#[test]
fn test_extract_negation_from_current_dir() -> Result<()> {
    let test = CliTest::with_file("views/main.html", r#"<b data-i18n="main_title"></b>"#)?;
    test.write_file("views/legacy/old.html", r#"<b data-i18n="legacy_title"></b>"#)?;
    test.write_file("index.html", r#"<b data-i18n="index_title"></b>"#)?;

    let output = test
        .extract_command()
        .args([
            "--dest",
            "out.txt",
            "views/**/*.html",
            "!views/legacy/**",
            "*.html",
            "index.html",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(test.read_file("out.txt")?, "index_title\nmain_title");

    Ok(())
}

#[test]
fn test_extract_missing_source_warns() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<b data-i18n="title"></b>"#)?;

    let output = test
        .extract_command()
        .args(["--dest", "out.txt", "index.html", "missing.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: Source file"));
    assert!(stderr(&output).contains("missing.html\" not found."));
    assert_eq!(test.read_file("out.txt")?, "title");

    Ok(())
}

#[test]
fn test_extract_malformed_annotation_fails() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<b data-i18n="[title]"></b>"#)?;

    let output = test
        .extract_command()
        .args(["--dest", "out.txt", "index.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("malformed i18n annotation"));
    assert!(!test.exists("out.txt"));

    Ok(())
}

#[test]
fn test_extract_gen_prop_list() -> Result<()> {
    let test = CliTest::with_file(
        "src/index.html",
        r#"<button data-i18n="ns:main_ok_button"></button><a data-i18n="ns:main_cancel"></a>"#,
    )?;
    test.write_file(
        "src/i18n/messages.properties",
        "main.ok_button = OK\nmain.cancel = Cancel\n",
    )?;
    test.write_file(
        "src/i18n/messages.es.properties",
        "main.ok_button = Aceptar\n",
    )?;

    let output = test
        .extract_command()
        .args([
            "--action",
            "gen_prop_list",
            "--translation-file",
            "src/i18n/messages",
            "--dest",
            "build",
            "src/index.html",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        test.read_file("build/mocks/es.missing.json")?,
        r#"{
    "ns:main_cancel": "__MISSING_TRANSLATION__"
}"#
    );
    assert_eq!(
        test.read_file("build/mocks/en.found.json")?,
        r#"{
    "ns:main_cancel": "Cancel",
    "ns:main_ok_button": "OK"
}"#
    );
    assert_eq!(
        test.read_file("build/spring_props.json")?,
        r##"{
    "ns:main_cancel": "#springMessage( 'main.cancel' )",
    "ns:main_ok_button": "#springMessage( 'main.ok_button' )"
}"##
    );
    assert_eq!(
        test.read_file("build/propertiesFiles/messages.es.properties")?,
        "main.ok_button = Aceptar\n"
    );
    assert!(
        test.read_file("build/missing_translations.txt")?
            .contains("[es] 1 of 2 keys missing")
    );

    Ok(())
}

#[test]
fn test_extract_gen_prop_list_without_catalog_fails() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<b data-i18n="title"></b>"#)?;

    let output = test
        .extract_command()
        .args([
            "--action",
            "gen_prop_list",
            "--translation-file",
            "i18n/messages",
            "--dest",
            "build",
            "index.html",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no translation files match"));
    assert!(!test.exists("build"));

    Ok(())
}
