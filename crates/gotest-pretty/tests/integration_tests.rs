// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests for gotest-pretty
//!
//! These tests run complete event streams through the pipeline and check the
//! rendered report.


use gotest_events::EventsError;
use gotest_pretty::pipeline::RunError;
use gotest_pretty::reporter::ReportOptions;
use similar_asserts::assert_eq;
use test_utils::{
    TempTestDir, event, fixtures_dir, numbered_source, output, render, render_with, stream,
};

const PACKAGE: &str = "github.com/example/gotest-pretty/test";

// ============================================================================
// Small scenarios
// ============================================================================

#[test]
fn test_single_passing_test() {
    let temp = TempTestDir::new("single_pass");
    let input = stream(&[
        event("run", "pkg", "T1"),
        output("pkg", "T1", "x\n"),
        event("pass", "pkg", "T1"),
    ]);

    let rendered = render(&input, temp.path());
    let summary = rendered.result.expect("run should succeed");

    assert_eq!(
        rendered.text,
        " RUN  pkg T1\n PASS  pkg T1\n\nSummary:  1 passed, 0 failed, 1 total\n"
    );
    assert_eq!(summary.total(), 1);
}

#[test]
fn test_failed_parent_with_passing_subtest() {
    let temp = TempTestDir::new("parent_fail");
    let input = stream(&[
        event("run", "pkg", "T1"),
        event("run", "pkg", "T1/sub"),
        event("pass", "pkg", "T1/sub"),
        event("fail", "pkg", "T1"),
    ]);

    let rendered = render(&input, temp.path());
    rendered.result.expect("run should succeed");

    assert_eq!(
        rendered.text,
        concat!(
            " RUN  pkg T1\n",
            " FAIL  pkg T1\n",
            "\t✓ sub\n",
            "\n",
            "pkg - T1:\n",
            "\t✓ sub\n",
            "\n",
            "Summary:  0 passed, 1 failed, 1 total\n",
        )
    );
}

#[test]
fn test_unknown_action_aborts_without_summary() {
    let temp = TempTestDir::new("unknown_action");
    let input = stream(&[
        event("run", "pkg", "T1"),
        r#"{"Action":"bogus"}"#.to_string(),
        event("pass", "pkg", "T1"),
    ]);

    let rendered = render(&input, temp.path());

    assert!(matches!(
        rendered.result,
        Err(RunError::Events(EventsError::UnknownAction { .. }))
    ));
    assert!(!rendered.text.contains("Summary:"));
    assert!(!rendered.text.contains("PASS"));
}

#[test]
fn test_assertion_header_renders_snippet() {
    let temp = TempTestDir::new("snippet");
    temp.write_file("foo_test.go", &numbered_source(20));
    let input = stream(&[
        event("run", "example.com/pkg", "TestFoo"),
        output("example.com/pkg", "TestFoo", "foo_test.go:12:"),
        event("fail", "example.com/pkg", "TestFoo"),
    ]);

    let rendered = render(&input, temp.path());
    rendered.result.expect("run should succeed");

    assert!(
        rendered.text.contains(concat!(
            "foo_test.go:12:\n",
            "   10 |line 10\n",
            "   11 |line 11\n",
            " > 12 |line 12\n",
            "   13 |line 13\n",
            "   14 |line 14\n",
        )),
        "report was:\n{}",
        rendered.text
    );
}

#[test]
fn test_snippet_found_under_package_suffix() {
    let temp = TempTestDir::new("suffix");
    temp.write_file("pkg/foo_test.go", &numbered_source(20));
    let input = stream(&[
        event("run", "example.com/mod/pkg", "TestFoo"),
        output("example.com/mod/pkg", "TestFoo", "    foo_test.go:5: \n"),
        event("fail", "example.com/mod/pkg", "TestFoo"),
    ]);

    let rendered = render(&input, temp.path());
    rendered.result.expect("run should succeed");
    assert!(rendered.text.contains(" > 5 |line 5\n"));
}

#[test]
fn test_missing_source_shows_file_name() {
    let temp = TempTestDir::new("missing_source");
    let input = stream(&[
        event("run", "pkg", "TestFoo"),
        output("pkg", "TestFoo", "    foo_test.go:12: \n"),
        event("fail", "pkg", "TestFoo"),
    ]);

    let rendered = render(&input, temp.path());
    rendered.result.expect("run should succeed");
    assert!(rendered.text.contains("pkg - TestFoo:\n\nfoo_test.go\n\n"));
}

#[test]
fn test_line_number_past_usize_shows_file_name() {
    let temp = TempTestDir::new("huge_line");
    temp.write_file("foo_test.go", &numbered_source(20));
    let input = stream(&[
        event("run", "pkg", "TestFoo"),
        output("pkg", "TestFoo", "    foo_test.go:18446744073709551615: \n"),
        event("fail", "pkg", "TestFoo"),
    ]);

    let rendered = render(&input, temp.path());
    rendered.result.expect("run should succeed");
    assert!(rendered.text.contains("pkg - TestFoo:\n\nfoo_test.go\n\n"));
    assert!(!rendered.text.contains(" > "));
}

#[test]
fn test_non_json_lines_are_forwarded() {
    let temp = TempTestDir::new("passthrough");
    let input = stream(&[
        "# example.com/broken".to_string(),
        "./broken.go:3:1: syntax error: unexpected }".to_string(),
        event("run", "pkg", "T1"),
        event("pass", "pkg", "T1"),
    ]);

    let rendered = render(&input, temp.path());
    rendered.result.expect("run should succeed");
    assert!(rendered.text.starts_with(
        "# example.com/broken\n./broken.go:3:1: syntax error: unexpected }\n RUN  pkg T1\n"
    ));
}

#[test]
fn test_unfinished_test_does_not_crash() {
    let temp = TempTestDir::new("unfinished");
    let input = stream(&[
        event("run", "pkg", "T1"),
        event("pass", "pkg", "T1"),
        event("run", "pkg", "THung"),
        output("pkg", "THung", "still going\n"),
    ]);

    let rendered = render(&input, temp.path());
    let summary = rendered.result.expect("run should succeed");
    assert_eq!(summary.unfinished, 1);
    assert!(
        rendered
            .text
            .ends_with("Summary:  1 passed, 0 failed, 1 total\n")
    );
}

#[test]
fn test_overwritten_run_lines() {
    let temp = TempTestDir::new("overwrite");
    let input = stream(&[event("run", "pkg", "T1"), event("pass", "pkg", "T1")]);

    let rendered = render_with(
        &input,
        temp.path(),
        ReportOptions {
            overwrite_run_line: true,
            show_elapsed: false,
        },
    );
    rendered.result.expect("run should succeed");
    assert!(rendered.text.starts_with(" RUN  pkg T1\r PASS  pkg T1\n"));
}

#[test]
fn test_empty_input() {
    let temp = TempTestDir::new("empty");
    let rendered = render("", temp.path());
    rendered.result.expect("run should succeed");
    assert_eq!(rendered.text, "\nSummary:  0 passed, 0 failed, 0 total\n");
}

// ============================================================================
// Recorded run
// ============================================================================

fn sample_report() -> String {
    let input = std::fs::read_to_string(fixtures_dir().join("sample-run.jsonl"))
        .expect("Failed to read sample-run.jsonl fixture");
    let rendered = render(&input, &fixtures_dir());
    rendered.result.expect("run should succeed");
    rendered.text
}

#[test]
fn test_sample_run_live_section() {
    let report = sample_report();
    let live: Vec<String> = report.lines().take(14).map(str::to_string).collect();

    assert_eq!(
        live,
        vec![
            format!(" RUN  {PACKAGE} TestPass"),
            format!(" PASS  {PACKAGE} TestPass"),
            format!(" RUN  {PACKAGE} TestFail"),
            format!(" FAIL  {PACKAGE} TestFail"),
            format!(" RUN  {PACKAGE} TestSubTests"),
            format!(" FAIL  {PACKAGE} TestSubTests"),
            "\t✓ 0_-_one".to_string(),
            "\t✓ 1_-_two".to_string(),
            "\t✕ 2_-_three".to_string(),
            format!(" RUN  {PACKAGE} TestWithSkip"),
            format!(" SKIP  {PACKAGE} TestWithSkip"),
            format!(" RUN  {PACKAGE} TestWithPanic"),
            format!(" FAIL  {PACKAGE} TestWithPanic"),
            format!("FAIL\t{PACKAGE}\t0.010s"),
        ]
    );
}

#[test]
fn test_sample_run_assertion_failure() {
    let report = sample_report();
    let expected = format!(
        concat!(
            "\n{pkg} - TestFail:\n",
            "\n",
            "test_test.go:16:\n",
            "   14 |\n",
            "   15 |func TestFail(t *testing.T) {{\n",
            " > 16 |\tassert.Equal(t, 1, 2)\n",
            "   17 |}}\n",
            "   18 |\n",
            "\n",
            "        \tError:      \tNot equal: \n",
            "        \t            \texpected: 1\n",
            "        \t            \tactual  : 2\n",
        ),
        pkg = PACKAGE
    );
    assert!(report.contains(&expected), "report was:\n{report}");
}

#[test]
fn test_sample_run_failed_subtest_output() {
    let report = sample_report();
    let expected = format!(
        concat!(
            "\n{pkg} - TestSubTests:\n",
            "\t✓ 0_-_one\n",
            "\t✓ 1_-_two\n",
            "\t✕ 2_-_three\n",
            "\n{pkg} - TestSubTests/2_-_three:\n",
            "\n",
            "test_test.go:24:\n",
        ),
        pkg = PACKAGE
    );
    assert!(report.contains(&expected), "report was:\n{report}");
    assert!(report.contains(" > 24 |\t\t\tassert.True(t, i < 2)\n"));
    assert!(report.contains("        \tError:      \tShould be true\n"));
}

#[test]
fn test_sample_run_panic_trace() {
    let report = sample_report();
    let expected = format!(
        concat!(
            "\n{pkg} - TestWithPanic:\n",
            "\n",
            "test_test.go:38:\n",
            "   36 |\t\tt *time.Time\n",
            "   37 |\t}}\n",
            " > 38 |\tFoo{{}}.t.Format(\"2006\")\n",
            "   39 |}}\n",
            "   40 |\n",
            "\n",
            "panic: runtime error: invalid memory address or nil pointer dereference [recovered]\n",
        ),
        pkg = PACKAGE
    );
    assert!(report.contains(&expected), "report was:\n{report}");
}

#[test]
fn test_sample_run_summary() {
    let report = sample_report();
    assert!(report.ends_with("\nSummary:  1 passed, 3 failed, 1 skipped, 5 total\n"));
    // Passing and skipped tests have no failure section.
    assert!(!report.contains(" - TestPass:"));
    assert!(!report.contains(" - TestWithSkip:"));
}
