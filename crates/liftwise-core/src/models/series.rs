// ABOUTME: Derived exercise series grouping over workout set collections
// ABOUTME: Chronological sorting plus per-exercise and per-session partitioning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::collections::BTreeMap;

use super::workout_set::WorkoutSet;

/// Sort set references chronologically: timestamp ascending with the session
/// ordinal as tie-break. Sets without a resolved timestamp sort after all
/// dated sets, ordered by session key then ordinal.
///
/// Callers must not assume pre-sorted input; every temporal pass sorts a
/// borrowed copy through this function first.
pub fn sort_chronological(sets: &mut [&WorkoutSet]) {
    sets.sort_by(|a, b| {
        let a_key = (a.timestamp.is_none(), a.timestamp, &a.session_key, a.position);
        let b_key = (b.timestamp.is_none(), b.timestamp, &b.session_key, b.position);
        a_key.cmp(&b_key)
    });
}

/// Partition sets by exercise identifier, chronologically ordered within each
/// exercise. Derived on every call, never cached.
#[must_use]
pub fn group_by_exercise(sets: &[WorkoutSet]) -> BTreeMap<String, Vec<&WorkoutSet>> {
    let mut grouped: BTreeMap<String, Vec<&WorkoutSet>> = BTreeMap::new();
    for set in sets {
        grouped.entry(set.exercise.clone()).or_default().push(set);
    }
    for series in grouped.values_mut() {
        sort_chronological(series);
    }
    grouped
}

/// Partition sets by exercise, then by session key, ordered by the session
/// ordinal within each session. Session-scoped analyses (transitions, wisdom)
/// consume this shape; it deliberately keeps timestamp-less sets, which still
/// carry a session key and an ordinal.
#[must_use]
pub fn group_by_exercise_and_session(
    sets: &[WorkoutSet],
) -> BTreeMap<String, BTreeMap<String, Vec<&WorkoutSet>>> {
    let mut grouped: BTreeMap<String, BTreeMap<String, Vec<&WorkoutSet>>> = BTreeMap::new();
    for set in sets {
        grouped
            .entry(set.exercise.clone())
            .or_default()
            .entry(set.session_key.clone())
            .or_default()
            .push(set);
    }
    for sessions in grouped.values_mut() {
        for session in sessions.values_mut() {
            session.sort_by_key(|s| s.position);
        }
    }
    grouped
}
