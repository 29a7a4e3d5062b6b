use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
    "options": { "action": "list_props" },
    "jobs": {
        "build_list_props": {
            "src": ["src/tmpl/**/*.tmpl", "src/views/**/*.html", "src/index.html"],
            "dest": "build/prop_list.txt"
        },
        "build_norm_props": {
            "options": { "action": "norm_props" },
            "src": ["src/tmpl/**/*.tmpl", "src/views/**/*.html", "src/index.html"],
            "dest": "build/norm_props.js"
        }
    }
}"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(".springrc.json", CONFIG)?;
    test.write_file(
        "src/index.html",
        r#"<h1 data-i18n="page.title"></h1><p data-i18n="page.intro.text"></p>"#,
    )?;
    test.write_file(
        "src/tmpl/row.tmpl",
        r#"<td data-i18n="[title]table.row.hint;table.row"></td>"#,
    )?;
    Ok(test)
}

#[test]
fn test_run_all_jobs() -> Result<()> {
    let test = project()?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("Ran 2 jobs"));
    assert_eq!(
        test.read_file("build/prop_list.txt")?,
        "page.intro.text\npage.title\ntable.row\ntable.row.hint"
    );
    assert_eq!(
        test.read_file("build/norm_props.js")?,
        r#"{
    "page_intro.text": "page.intro.text",
    "page_title": "page.title",
    "table_row": "table.row",
    "table_row.hint": "table.row.hint"
}"#
    );

    Ok(())
}

#[test]
fn test_run_named_job() -> Result<()> {
    let test = project()?;

    let output = test.run_command().arg("build_norm_props").output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.exists("build/norm_props.js"));
    assert!(!test.exists("build/prop_list.txt"));

    Ok(())
}

#[test]
fn test_run_unknown_job() -> Result<()> {
    let test = project()?;

    let output = test.run_command().arg("nope").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown job \"nope\""));

    Ok(())
}

#[test]
fn test_run_unknown_action_fails_only_its_job() -> Result<()> {
    let test = CliTest::with_file(
        ".springrc.json",
        r#"{
            "jobs": {
                "bad": { "options": { "action": "js_props" }, "src": ["index.html"], "dest": "bad.txt" },
                "good": { "src": ["index.html"], "dest": "good.txt" }
            }
        }"#,
    )?;
    test.write_file("index.html", r#"<b data-i18n="title"></b>"#)?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: job \"bad\" failed: unknown action \"js_props\""));
    assert!(stdout(&output).contains("Ran 2 jobs: 1 failed"));
    assert_eq!(test.read_file("good.txt")?, "title");
    assert!(!test.exists("bad.txt"));

    Ok(())
}

#[test]
fn test_run_from_subdirectory() -> Result<()> {
    let test = project()?;

    let output = test
        .run_command()
        .args(["--source-root", "src/tmpl"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(test.root().join("build/prop_list.txt").exists());

    Ok(())
}

#[test]
fn test_run_without_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No .springrc.json found"));

    Ok(())
}

#[test]
fn test_run_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".springrc.json", r#"{ "jobs": { "a": { "src": [] } } }"#)?;

    let output = test.run_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}
