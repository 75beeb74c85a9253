//! Domain-specific assertion macros for scopelog harnesses.
//!
//! These wrap `pretty_assertions` and add context so a failure says which
//! tree invariant broke.

/// Assert the pre-order indents of every node in a tree.
///
/// ```rust
/// assert_indents!(tree, [0, 1, 2]);
/// ```
#[macro_export]
macro_rules! assert_indents {
    ($tree:expr, [$($indent:expr),* $(,)?]) => {{
        let tree: &scopelog::Log = &$tree;
        let actual: Vec<usize> = tree.iter().map(scopelog::Log::indent).collect();
        let expected: Vec<usize> = vec![$($indent),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_indents! failed: pre-order indents differ"
        );
    }};
}

/// Assert the compact lines a tree renders to.
#[macro_export]
macro_rules! assert_lines {
    ($tree:expr, [$($line:expr),* $(,)?]) => {{
        let tree: &scopelog::Log = &$tree;
        let actual: Vec<String> = tree.lines().collect();
        let expected: Vec<String> = vec![$(String::from($line)),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_lines! failed: rendered lines differ"
        );
    }};
}
