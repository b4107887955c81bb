//! Console output: the fixed success banner and an optional unified diff.

use crate::patch::Step;
use colored::Colorize;
use similar::TextDiff;
use std::io::{self, Write};
use std::path::Path;

pub const HEADLINE: &str = "Successfully fixed worlds.js!";

/// The success banner, one entry per line.
///
/// Always the same text: it does not depend on which steps matched.
pub fn banner_lines() -> Vec<String> {
    let mut lines = vec![HEADLINE.to_string(), "Changes made:".to_string()];
    lines.extend(Step::ALL.iter().map(Step::to_string));
    lines
}

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    for line in banner_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn print_banner() -> io::Result<()> {
    write_banner(&mut io::stdout().lock())
}

/// Unified diff of `original` against `patched`, three lines of context.
///
/// Added lines are green, removed lines red, hunk headers cyan.
pub fn write_diff(
    out: &mut impl Write,
    file: &Path,
    original: &str,
    patched: &str,
) -> io::Result<()> {
    let old_label = format!("{} (original)", file.display());
    let new_label = format!("{} (patched)", file.display());
    let unified = TextDiff::from_lines(original, patched)
        .unified_diff()
        .context_radius(3)
        .header(&old_label, &new_label)
        .to_string();

    writeln!(out)?;
    for (idx, line) in unified.lines().enumerate() {
        let is_header = idx < 2 && (line.starts_with("---") || line.starts_with("+++"));
        let painted = if is_header {
            line.dimmed()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else if line.starts_with("@@") {
            line.cyan()
        } else {
            line.normal()
        };
        writeln!(out, "{painted}")?;
    }
    Ok(())
}

pub fn print_diff(file: &Path, original: &str, patched: &str) -> io::Result<()> {
    write_diff(&mut io::stdout().lock(), file, original, patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_text() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Successfully fixed worlds.js!
Changes made:
1. Added 'thuis' case to background cache switch statement
2. Added drawThuisBackground function for cached background
3. Added drawThuisFurniture function for static furniture
4. Modified drawThuis to use cached background
"
        );
    }

    #[test]
    fn test_diff_has_labels_and_hunks() {
        let mut out = Vec::new();
        write_diff(
            &mut out,
            Path::new("js/worlds.js"),
            "a\nb\nc\n",
            "a\nb\nnew\nc\n",
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("js/worlds.js (original)"));
        assert!(text.contains("js/worlds.js (patched)"));
        assert!(text.contains("@@"));
        assert!(text.contains("+new"));
        assert!(!text.contains("-a"));
    }

    #[test]
    fn test_diff_of_identical_text_has_no_hunks() {
        let mut out = Vec::new();
        write_diff(&mut out, Path::new("worlds.js"), "same\n", "same\n").unwrap();

        assert!(!String::from_utf8(out).unwrap().contains("@@"));
    }
}
