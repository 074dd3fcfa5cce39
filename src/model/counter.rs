/// Default maximum length of the pet description, in characters.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 500;

/// Clamps `value` to at most `limit` characters and returns its length.
///
/// Longer values are truncated in place to exactly `limit` characters, so the
/// returned count is always `min(original length, limit)`. Lengths are counted
/// in `char`s, never splitting a code point.
pub fn enforce_limit(value: &mut String, limit: usize) -> usize {
    if let Some((cut, _)) = value.char_indices().nth(limit) {
        value.truncate(cut);
    }
    value.chars().count()
}
