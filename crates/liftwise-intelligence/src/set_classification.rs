// ABOUTME: Warmup vs working-set classification from raw set-type tags
// ABOUTME: Leaf utility used by every other analysis pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use liftwise_core::WorkoutSet;

/// Classify a raw set-type tag as a warmup marker
///
/// Importers disagree on tagging conventions, so matching is deliberately
/// loose: the bare `"w"` shorthand and anything containing `"warmup"`
/// (case-insensitive) count as warmups; an empty tag does not.
#[must_use]
pub fn is_warmup(tag: &str) -> bool {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return false;
    }
    tag == "w" || tag.contains("warmup")
}

/// Whether a set counts toward volume, PR, and progression analysis
#[must_use]
pub fn is_working_set(set: &WorkoutSet) -> bool {
    !is_warmup(&set.set_type)
}
