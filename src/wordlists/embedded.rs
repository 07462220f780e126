//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// Embedded (answers, extra guesses) for a word length
#[must_use]
pub fn lists_for(length: usize) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match length {
        4 => Some((ANSWERS_4, ALLOWED_4)),
        5 => Some((ANSWERS_5, ALLOWED_5)),
        6 => Some((ANSWERS_6, ALLOWED_6)),
        7 => Some((ANSWERS_7, ALLOWED_7)),
        _ => None,
    }
}
