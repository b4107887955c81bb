//! The four textual steps that move the home world onto the background cache.
//!
//! Every step is a pure text transformation. A step whose anchor
//! is missing returns its input unchanged; that is never an error. The
//! outcome of each step is recorded in a [`PatchReport`] and logged, but it
//! never changes what the caller prints.

use crate::anchors::{
    BACKGROUND_SECTION, DRAW_THUIS_FN, DRAW_THUIS_FURNITURE, INTERIOR_BACKGROUND, SWITCH_CASE,
};
use crate::templates::{
    CACHED_DRAW_THUIS_FN, DRAW_THUIS_FURNITURE_SIGNATURE, DRAW_THUIS_SIGNATURE,
    FUNCTION_SEPARATOR, THUIS_BACKGROUND_FN, THUIS_CASE,
};
use regex::{Captures, NoExpand};
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

/// One of the four patch steps, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    InsertCase,
    InsertBackground,
    ExtractFurniture,
    ReplaceDrawThuis,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::InsertCase,
        Step::InsertBackground,
        Step::ExtractFurniture,
        Step::ReplaceDrawThuis,
    ];

    /// One-based position, as printed in the success banner.
    pub fn number(self) -> usize {
        match self {
            Step::InsertCase => 1,
            Step::InsertBackground => 2,
            Step::ExtractFurniture => 3,
            Step::ReplaceDrawThuis => 4,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::InsertCase => "Added 'thuis' case to background cache switch statement",
            Step::InsertBackground => "Added drawThuisBackground function for cached background",
            Step::ExtractFurniture => "Added drawThuisFurniture function for static furniture",
            Step::ReplaceDrawThuis => "Modified drawThuis to use cached background",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.description())
    }
}

/// What a single step did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "StepOutcome records whether the anchor was found"]
pub enum StepOutcome {
    /// Anchor found and the buffer was rewritten
    Applied,
    /// Anchor not found; buffer left as it was
    NoMatch,
    /// Not attempted because an earlier step it depends on found nothing
    Skipped,
}

impl StepOutcome {
    fn from_match(matched: bool) -> Self {
        if matched {
            StepOutcome::Applied
        } else {
            StepOutcome::NoMatch
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Applied => write!(f, "applied"),
            StepOutcome::NoMatch => write!(f, "no match"),
            StepOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Patched text plus the outcome of every step, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    /// Text as it was before the first step
    pub original: String,
    pub content: String,
    pub steps: Vec<(Step, StepOutcome)>,
}

impl PatchReport {
    pub fn outcome(&self, step: Step) -> Option<StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| *outcome)
    }

    /// True when the patched text differs from the original.
    pub fn changed(&self) -> bool {
        self.original != self.content
    }

    /// True when at least one step matched its anchor.
    pub fn any_applied(&self) -> bool {
        self.steps
            .iter()
            .any(|(_, outcome)| *outcome == StepOutcome::Applied)
    }
}

/// Step 1: add the `thuis` branch after the `paarden` case of the background switch.
pub fn insert_thuis_case(content: &str) -> Cow<'_, str> {
    SWITCH_CASE.replace_all(content, |caps: &Captures| {
        format!("{}{}{}", &caps[1], THUIS_CASE, &caps[2])
    })
}

/// Step 2: add `drawThuisBackground` right before `drawNatuurBackground`.
pub fn insert_thuis_background(content: &str) -> Cow<'_, str> {
    BACKGROUND_SECTION.replace_all(content, |caps: &Captures| {
        format!("{}{}{}", &caps[1], THUIS_BACKGROUND_FN, &caps[2])
    })
}

/// Step 3: build `drawThuisFurniture` out of the current `drawThuis`.
///
/// Takes the first match only, renames it and drops the wall and floor
/// drawing. Returns `None` when `drawThuis` does not have the expected shape.
pub fn extract_furniture(content: &str) -> Option<String> {
    let found = DRAW_THUIS_FURNITURE.find(content)?;
    let renamed = found
        .as_str()
        .replace(DRAW_THUIS_SIGNATURE, DRAW_THUIS_FURNITURE_SIGNATURE);
    Some(INTERIOR_BACKGROUND.replace_all(&renamed, "").into_owned())
}

/// Step 4: swap `drawThuis` for the cached version and append `furniture` after it.
pub fn replace_draw_thuis(content: &str, furniture: &str) -> String {
    let replaced = DRAW_THUIS_FN.replace_all(content, NoExpand(CACHED_DRAW_THUIS_FN));
    let with_furniture = format!("{CACHED_DRAW_THUIS_FN}{FUNCTION_SEPARATOR}{furniture}");
    replaced.replace(CACHED_DRAW_THUIS_FN, &with_furniture)
}

/// Run all four steps over `content`.
pub fn patch_source(original: &str) -> PatchReport {
    let content = original;
    let mut steps = Vec::with_capacity(Step::ALL.len());

    let content = apply_step(Step::InsertCase, content, &mut steps, insert_thuis_case);
    let content = apply_step(
        Step::InsertBackground,
        &content,
        &mut steps,
        insert_thuis_background,
    );

    let content = match extract_furniture(&content) {
        Some(furniture) => {
            record(&mut steps, Step::ExtractFurniture, StepOutcome::Applied);
            let patched = replace_draw_thuis(&content, &furniture);
            record(
                &mut steps,
                Step::ReplaceDrawThuis,
                StepOutcome::from_match(patched != content),
            );
            patched
        }
        None => {
            record(&mut steps, Step::ExtractFurniture, StepOutcome::NoMatch);
            record(&mut steps, Step::ReplaceDrawThuis, StepOutcome::Skipped);
            content
        }
    };

    PatchReport {
        original: original.to_string(),
        content,
        steps,
    }
}

fn apply_step<F>(
    step: Step,
    content: &str,
    steps: &mut Vec<(Step, StepOutcome)>,
    f: F,
) -> String
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    let result = f(content);
    record(
        steps,
        step,
        StepOutcome::from_match(matches!(result, Cow::Owned(_))),
    );
    result.into_owned()
}

fn record(steps: &mut Vec<(Step, StepOutcome)>, step: Step, outcome: StepOutcome) {
    debug!(step = step.number(), %outcome, "{}", step.description());
    steps.push((step, outcome));
}
