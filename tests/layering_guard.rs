//! Layering guardrails: comparison logic must stay independent of the terminal.
//!
//! Only `reporter.rs` may print or emit ANSI escapes, and only `cli/mod.rs` may
//! call `process::exit`. These tests scan the sources to keep it that way.

const CORE_SOURCES: &[(&str, &str)] = &[
    ("locator.rs", include_str!("../src/harness/locator.rs")),
    ("enumerator.rs", include_str!("../src/harness/enumerator.rs")),
    ("executor.rs", include_str!("../src/harness/executor.rs")),
    ("comparator.rs", include_str!("../src/harness/comparator.rs")),
    ("diff.rs", include_str!("../src/harness/diff.rs")),
    ("mod.rs", include_str!("../src/harness/mod.rs")),
];

/// Source lines outside the `#[cfg(test)]` module
fn production_lines(source: &str) -> impl Iterator<Item = &str> {
    source.lines().take_while(|line| line.trim() != "#[cfg(test)]")
}

#[test]
fn core_modules_do_not_print() {
    for (name, source) in CORE_SOURCES {
        for line in production_lines(source) {
            let code = line.split("//").next().unwrap_or("");
            assert!(
                !code.contains("println!") && !code.contains("print!("),
                "{name} prints to the console; route output through TestReporter: {line}"
            );
        }
    }
}

#[test]
fn core_modules_do_not_emit_colors() {
    for (name, source) in CORE_SOURCES {
        assert!(
            !production_lines(source).any(|line| line.contains("\\x1b")),
            "{name} contains ANSI escapes; colors belong in reporter.rs"
        );
    }
}

#[test]
fn only_cli_exits_the_process() {
    for (name, source) in CORE_SOURCES {
        assert!(
            !source.contains("process::exit"),
            "{name} calls process::exit; return an Outcome or SetupError instead"
        );
    }
    assert!(!include_str!("../src/harness/reporter.rs").contains("process::exit"));
}
