/// Characters that are rejected by at least one common filesystem.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Map an arbitrary string to a value that is safe to use as a single path
/// segment. Idempotent: sanitizing an already-sanitized name is a no-op.
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized: String = name
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();

    // `.` and `..` would resolve to directories, not filenames
    if sanitized == "." || sanitized == ".." {
        sanitized.insert(0, '_');
    }

    if sanitized.is_empty() {
        sanitized.push_str("unnamed");
    }

    sanitized
}
