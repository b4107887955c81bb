//! Anchor patterns locating each edit point in `worlds.js`.
//!
//! The patterns are literal fragments of the current file and compile once
//! per process. They are deliberately brittle: a file that has drifted (or
//! has already been patched) simply stops matching.

use regex::Regex;
use std::sync::LazyLock;

/// Last `case` of the background switch followed by the extension marker.
///
/// Group 1 is the `paarden` case, group 2 the marker comment.
pub static SWITCH_CASE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(        case 'paarden':\n            drawPaardenBackground\(bgCtx\);\n            break;\n)(        // Add more world types as needed)",
    )
});

/// Section marker directly followed by the first background function.
///
/// Group 1 is the marker line, group 2 the start of `drawNatuurBackground`.
pub static BACKGROUND_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(// Background drawing functions for static elements\n)(function drawNatuurBackground)")
});

/// `drawThuis` from its opening brace through the last furniture statement.
///
/// Only matches while no `}` appears between the opening brace and the sofa
/// comment.
pub static DRAW_THUIS_FURNITURE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?s)function drawThuis\(ctx\) \{[^}]*// 1\. BANK \(SOFA\)(.*?)// Add more decorative elements.*?\n    ctx\.fillRect\(1730, 490, 40, 50\);\n\}",
    )
});

/// Wall and floor drawing, up to the first four-space-indented closing brace.
pub static INTERIOR_BACKGROUND: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)    // Modern home interior background.*?    \}\n"));

/// Whole `drawThuis` function, ended by the first `}` at column zero.
pub static DRAW_THUIS_FN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)function drawThuis\(ctx\) \{.*?\n\}"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid anchor pattern {pattern:?}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_anchors_compile() {
        for anchor in [
            &*SWITCH_CASE,
            &*BACKGROUND_SECTION,
            &*DRAW_THUIS_FURNITURE,
            &*INTERIOR_BACKGROUND,
            &*DRAW_THUIS_FN,
        ] {
            assert!(!anchor.as_str().is_empty());
        }
    }

    #[test]
    fn furniture_anchor_stops_at_closing_brace() {
        let text = "function drawThuis(ctx) {\n    for (;;) {\n    }\n    // 1. BANK (SOFA)\n";
        assert!(DRAW_THUIS_FURNITURE.find(text).is_none());
    }

    #[test]
    fn draw_thuis_anchor_ignores_longer_names() {
        let text = "function drawThuisBackground(ctx) {\n}\nfunction drawThuisFurniture(ctx) {\n}";
        assert!(DRAW_THUIS_FN.find(text).is_none());
    }

    #[test]
    fn draw_thuis_anchor_is_lazy() {
        let text = "function drawThuis(ctx) {\n    a();\n}\n\nfunction b() {\n}";
        let found = DRAW_THUIS_FN.find(text).unwrap();
        assert_eq!(found.as_str(), "function drawThuis(ctx) {\n    a();\n}");
    }
}
