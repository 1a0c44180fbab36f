// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristic repair of UTF-8 text that was decoded as Latin-1.
//!
//! Backends and proxies occasionally mangle `’` into `â€™`. The repair is a
//! best guess: it is only accepted when it reduces the number of tell-tale
//! marker characters.

use std::borrow::Cow;

/// Characters that show up when UTF-8 bytes are read as Latin-1/cp1252
pub const MOJIBAKE_MARKERS: [char; 9] = [
    'Ã', 'Â', 'â', 'œ', 'ž', '¢', '€', '™', '\u{FFFD}',
];

/// Total occurrences of all marker characters in `s`
pub fn marker_count(s: &str) -> usize {
    s.chars().filter(|c| MOJIBAKE_MARKERS.contains(c)).count()
}

/// Repair mojibake in `s`, returning it untouched when no repair helps.
pub fn repair(s: &str) -> Cow<'_, str> {
    let original = marker_count(s);
    if original == 0 {
        return Cow::Borrowed(s);
    }

    let candidate = latin1_to_utf8(s);
    if marker_count(&candidate) < original {
        Cow::Owned(candidate)
    } else {
        Cow::Borrowed(s)
    }
}

/// Reinterpret the Latin-1 code units of `s` as UTF-8.
///
/// Characters above U+00FF have no Latin-1 byte and are dropped, as are
/// byte sequences that are not valid UTF-8.
fn latin1_to_utf8(s: &str) -> String {
    let bytes: Vec<u8> = s.chars().filter_map(|c| u8::try_from(c).ok()).collect();
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
#[path = "mojibake_tests.rs"]
mod tests;
