//! Mojibake repair
//!
//! The upstream service occasionally delivers UTF-8 text that was decoded
//! as Windows-1252 somewhere along the way ("FÃ¼r" instead of "Für"). The
//! repair re-encodes the string through Windows-1252 and re-decodes it as
//! UTF-8; if that yields valid UTF-8 the string was mojibake. Correct text,
//! including correct German umlauts, does not survive the round trip and is
//! returned unchanged.

use encoding_rs::WINDOWS_1252;

/// Doubly-encoded text resolves in two passes; anything deeper is noise.
const MAX_REPAIR_PASSES: usize = 4;

/// Repair corrupted character encoding in `input`.
///
/// Total over all string input and idempotent: the repair runs to a
/// fixpoint, so repairing twice yields the same result as repairing once.
#[must_use]
pub fn repair_text(input: &str) -> String {
    let mut current = input.to_string();
    for _ in 0..MAX_REPAIR_PASSES {
        match repair_once(&current) {
            Some(fixed) if fixed != current => current = fixed,
            _ => break,
        }
    }
    current
}

/// One re-encode/re-decode pass. Returns `None` when the input is not
/// mojibake under Windows-1252.
fn repair_once(text: &str) -> Option<String> {
    if text.is_ascii() {
        return None;
    }
    let (bytes, _, had_unmappable) = WINDOWS_1252.encode(text);
    if had_unmappable {
        return None;
    }
    std::str::from_utf8(&bytes).ok().map(str::to_string)
}
