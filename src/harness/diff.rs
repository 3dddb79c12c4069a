//! Side-by-side line diff for verbose mismatch reports
//!
//! Output follows the `diff -y` convention: reference on the left, actual output
//! on the right, and a gutter marker between them:
//!
//! - ` ` lines are identical
//! - `|` lines differ
//! - `<` line only in the reference
//! - `>` line only in the actual output

use std::time::Duration;

use similar::{DiffTag, TextDiff};

/// Past this, the diff falls back to a coarser alignment instead of searching further
const DIFF_DEADLINE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row<'a> {
    Same(&'a str),
    Changed(&'a str, &'a str),
    Removed(&'a str),
    Added(&'a str),
}

/// Render a side-by-side diff of `expected` against `actual`.
///
/// Returns an empty string when both sides are empty.
pub fn side_by_side(expected: &str, actual: &str) -> String {
    let rows = align(expected, actual);

    let width = expected.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let (l, marker, r) = match row {
            Row::Same(s) => (s, ' ', s),
            Row::Changed(l, r) => (l, '|', r),
            Row::Removed(l) => (l, '<', ""),
            Row::Added(r) => ("", '>', r),
        };
        let line = format!("{:<width$} {} {}", l, marker, r, width = width);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn align<'a>(expected: &'a str, actual: &'a str) -> Vec<Row<'a>> {
    let diff = TextDiff::configure().timeout(DIFF_DEADLINE).diff_lines(expected, actual);
    let left = diff.old_slices();
    let right = diff.new_slices();

    let mut rows = Vec::new();
    let mut removed = Vec::new();
    let mut added = Vec::new();
    for op in diff.ops() {
        let (tag, old, new) = op.as_tag_tuple();
        if tag == DiffTag::Equal {
            flush_hunk(&mut rows, &mut removed, &mut added);
            rows.extend(left[old].iter().copied().map(|l| Row::Same(strip_eol(l))));
        } else {
            removed.extend(left[old].iter().copied().map(strip_eol));
            added.extend(right[new].iter().copied().map(strip_eol));
        }
    }
    flush_hunk(&mut rows, &mut removed, &mut added);
    rows
}

fn strip_eol(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Pair removed and added lines of one hunk into changed rows.
fn flush_hunk<'a>(rows: &mut Vec<Row<'a>>, removed: &mut Vec<&'a str>, added: &mut Vec<&'a str>) {
    let paired = removed.len().min(added.len());
    for k in 0..paired {
        rows.push(Row::Changed(removed[k], added[k]));
    }
    rows.extend(removed[paired..].iter().copied().map(Row::Removed));
    rows.extend(added[paired..].iter().copied().map(Row::Added));
    removed.clear();
    added.clear();
}
