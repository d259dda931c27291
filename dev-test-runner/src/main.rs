//! Golden-output runner: `dev-test-runner [FIXTURES_DIR] [CASE_REGEX]`.
//!
//! Each `FIXTURES_DIR/*/case.json` names a schema, an optional template and
//! the expected SDL (or an expected error substring).
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use regex::Regex;
use serde::Deserialize;
use swagger_gql::{Options, Selection, SwaggerToGraphql, schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct Case {
    root_interface: String,
    #[serde(default = "default_schema")]
    schema: String,
    #[serde(default)]
    template: Option<String>,
    #[serde(default)]
    filter: Option<String>,
    #[serde(default)]
    exclude: Option<String>,
    #[serde(default = "default_expected")]
    expected: String,
    /// When set, the pass must fail with a message containing this text.
    #[serde(default)]
    expect_error: Option<String>,
}

fn default_schema() -> String { "schema.json".into() }
fn default_expected() -> String { "expected.graphql".into() }

enum Outcome {
    Pass,
    Fail(String),
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let root = PathBuf::from(args.next().unwrap_or_else(|| "fixtures".into()));
    let case_filter = args.next().map(|rx| Regex::new(&rx)).transpose()?;

    let pattern = root.join("*").join("case.json");
    let pattern = pattern.to_str().ok_or_else(|| anyhow!("non UTF-8 fixtures path"))?;
    let mut failed = 0usize;
    let mut total = 0usize;

    for entry in glob::glob(pattern)? {
        let case_path = entry?;
        let Some(dir) = case_path.parent() else { continue };
        let name = dir.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        if case_filter.as_ref().is_some_and(|rx| !rx.is_match(&name)) {
            continue;
        }
        total += 1;
        match run_case(dir, &case_path) {
            Ok(Outcome::Pass) => eprintln!("{} {name}", "✅".green()),
            Ok(Outcome::Fail(reason)) => {
                failed += 1;
                eprintln!("{} {name}\n{reason}", "❌".red());
            }
            Err(error) => {
                failed += 1;
                eprintln!("{} {name}: {error:#}", "❌".red());
            }
        }
    }

    eprintln!("{} of {total} cases passed", total - failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn run_case(dir: &Path, case_path: &Path) -> Result<Outcome> {
    let source = std::fs::read_to_string(case_path)?;
    let de = &mut serde_json::Deserializer::from_str(&source);
    let case: Case = serde_path_to_error::deserialize(de)
        .with_context(|| format!("invalid {}", case_path.display()))?;

    let document = schema::load_document(&std::fs::read_to_string(dir.join(&case.schema))?)?;
    let template = case.template.as_ref()
        .map(|file| std::fs::read_to_string(dir.join(file)))
        .transpose()?;
    let engine = SwaggerToGraphql::new(Options {
        schema: Some(document),
        root_interface: Some(case.root_interface.clone()),
        template,
    })?;
    let selection = Selection { filter: case.filter.clone(), exclude: case.exclude.clone() };
    let result = engine.render_all_with(&selection);

    if let Some(needle) = &case.expect_error {
        return Ok(match result {
            Err(error) if error.to_string().contains(needle.as_str()) => Outcome::Pass,
            Err(error) => Outcome::Fail(format!("  expected error containing `{needle}`, got `{error}`")),
            Ok(_) => Outcome::Fail(format!("  expected error containing `{needle}`, pass succeeded")),
        });
    }

    let actual = result?;
    let expected = std::fs::read_to_string(dir.join(&case.expected))?;
    if actual == expected {
        return Ok(Outcome::Pass);
    }
    Ok(Outcome::Fail(first_difference(&expected, &actual)))
}

fn first_difference(expected: &str, actual: &str) -> String {
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut line = 1usize;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (Some(e), Some(a)) if e == a => line += 1,
            (None, None) => return "  outputs differ only in trailing whitespace".into(),
            (e, a) => {
                return format!(
                    "  line {line}:\n    expected: {}\n    actual:   {}",
                    e.unwrap_or("<end>"),
                    a.unwrap_or("<end>"),
                );
            }
        }
    }
}
