//! Worlds Patcher: one-shot regex patch for `worlds.js`
//!
//! Moves the home world (`thuis`) of the game renderer onto the shared
//! background cache. Four fixed find/replace steps run over the file:
//!
//! 1. add a `thuis` case to the `getOrCreateBackgroundCanvas` switch
//! 2. add `drawThuisBackground` before `drawNatuurBackground`
//! 3. extract the furniture part of `drawThuis` into `drawThuisFurniture`
//! 4. shrink `drawThuis` to a blit of the cached canvas
//!
//! # Matching
//!
//! Anchors are literal fragments of the current file. A step whose anchor is
//! missing leaves the text alone and is not an error; step 4 only runs when
//! step 3 found something. Only file I/O can fail.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use worlds_patcher::{patch_file, PatchOptions};
//!
//! let report = patch_file(Path::new("js/worlds.js"), PatchOptions::default())?;
//! for (step, outcome) in &report.steps {
//!     println!("{step}: {outcome}");
//! }
//! # Ok::<(), worlds_patcher::PatchError>(())
//! ```

pub mod anchors;
pub mod file;
pub mod logging;
pub mod patch;
pub mod report;
pub mod templates;

// Re-exports
pub use file::{patch_file, read_source, write_source, PatchError, PatchOptions, DEFAULT_TARGET};
pub use patch::{
    extract_furniture, insert_thuis_background, insert_thuis_case, patch_source,
    replace_draw_thuis, PatchReport, Step, StepOutcome,
};
