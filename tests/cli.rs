use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::tempdir;

fn docweld() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("docweld").unwrap()
}

fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("docweld.yaml"),
        r#"site:
  title: AI Chatbot Support Service
  description: "Enterprise-grade customer support AI platform"
  repository: https://github.com/example/chatbot
  docs_version: 2.0.0
  updated: January 14, 2025
input:
  source: README.md
output:
  path: index.md
"#,
    )
    .unwrap();

    fs::write(
        dir.join("README.md"),
        r#"---
layout: home
title: Source Readme
---

## Getting Started

Install the service.

### Create a Session

**Method:** POST /api/sessions

> Important: you must configure credentials first.
"#,
    )
    .unwrap();
}

#[test]
fn assembles_document_end_to_end() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    docweld()
        .arg("--config-file")
        .arg(dir.path().join("docweld.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Documentation generated successfully!",
        ))
        .stdout(predicate::str::contains("characters"));

    let output = fs::read_to_string(dir.path().join("index.md")).unwrap();

    // Assembled shape: front matter, hero, transformed content, footer
    assert!(output.starts_with("---\nlayout: default\ntitle: AI Chatbot Support Service\n"));
    assert!(output.contains("## Table of Contents"));
    assert!(output.ends_with("</script>\n"));

    // Transformations applied
    assert!(output.contains("## Getting Started\n{: .fs-9 }"));
    assert!(output.contains("### Create a Session\n{: .fs-7 }"));
    assert!(output.contains("{: .label .label-blue }\nPOST\n\n**Endpoint:** /api/sessions"));
    assert!(output.contains("{: .important }\n> Important: you must configure credentials first."));
    assert!(!output.contains("**Method:**"));
    assert!(!output.contains("title: Source Readme"));
}

#[test]
fn defaults_apply_without_config_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "## Overview\n\nHello.\n").unwrap();

    docweld()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("index.md"));

    let output = fs::read_to_string(dir.path().join("index.md")).unwrap();
    assert!(output.starts_with("---\nlayout: default\ntitle: Documentation\n"));
    assert!(output.contains("## Overview\n{: .fs-9 }"));
}

#[test]
fn missing_source_fails_without_output() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("docweld.yaml"),
        "input:\n  source: does-not-exist.md\n",
    )
    .unwrap();

    docweld()
        .arg("-c")
        .arg(dir.path().join("docweld.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read source document"));

    assert!(!dir.path().join("index.md").exists());
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    docweld()
        .arg("-c")
        .arg(dir.path().join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}
