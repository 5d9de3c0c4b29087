//! Golden test cases for the HTML renderer.
//!
//! Each test case is a directory under `tests/cases/` containing:
//! - `input.md` - Source document
//! - `expected.html` - Expected HTML output
//! - `markymark.toml` - (Optional) Config to test specific flavors/extensions
//!
//! Run with `UPDATE_EXPECTED=1 cargo test` to regenerate expected outputs.

use markymark::{Config, parse, to_html};
use std::{fs, path::Path};

/// Load config from test case directory if it exists.
fn load_test_config(dir: &Path) -> Option<Config> {
    let config_path = dir.join("markymark.toml");
    if config_path.exists() {
        let content = fs::read_to_string(config_path).ok()?;
        Some(toml::from_str(&content).expect("invalid test case config"))
    } else {
        None
    }
}

/// Run a single golden test case.
fn run_golden_case(case_name: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cases")
        .join(case_name);

    let update_expected = std::env::var_os("UPDATE_EXPECTED").is_some();

    let input_path = dir.join("input.md");
    let expected_path = dir.join("expected.html");

    let config = load_test_config(&dir);

    // Read input file - preserve line endings exactly
    let input = fs::read_to_string(&input_path)
        .unwrap_or_else(|_| panic!("No input file found in {}", case_name));

    // Determinism: parsing twice gives the same items
    similar_asserts::assert_eq!(
        parse(&input, config.clone()),
        parse(&input, config.clone()),
        "determinism: {}",
        case_name
    );

    let output = to_html(&input, config);

    if update_expected {
        fs::write(&expected_path, &output).unwrap();
        return;
    }

    let expected = fs::read_to_string(&expected_path)
        .unwrap_or_else(|_| panic!("No expected.html found in {}", case_name));

    similar_asserts::assert_eq!(expected, output, "case: {}", case_name);
}

/// Macro to generate individual test functions for each golden case.
///
/// Usage: `golden_test_cases!(case1, case2, case3);`
macro_rules! golden_test_cases {
    ($($case:ident),+ $(,)?) => {
        $(
            #[test]
            fn $case() {
                run_golden_case(stringify!($case));
            }
        )+
    };
}

// To add a new test case:
// 1. Create a new directory under tests/cases/
// 2. Add the directory name to this list
golden_test_cases!(
    blockquotes,
    code_blocks,
    commonmark_no_tables,
    crlf_basic,
    emphasis,
    gfm_bare_urls,
    hard_line_breaks,
    headers,
    horizontal_rules,
    links,
    lists,
    pipe_table,
);
