// ABOUTME: Motivational quote rotation for the Home screen
// ABOUTME: Picks a random quote per mount from a fixed list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::seq::SliceRandom;

/// Quotes shown on the Home screen, one per mount
pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "The only bad workout is the one that didn't happen.",
    "Push yourself because no one else is going to do it for you.",
    "Don't stop when you're tired. Stop when you're done.",
    "Success starts with self-discipline.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Your body can stand almost anything. It's your mind that you have to convince.",
];

/// Pick a random motivational quote
#[must_use]
pub fn random_quote() -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MOTIVATIONAL_QUOTES[0])
}
