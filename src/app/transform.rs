/// Keyword (with its trailing space) that opens a declaration line.
pub const DECLARATION_PREFIX: &[u8] = b"package ";

/// Returns the bytes to embed for a file, dropping its first declaration line unless kept.
pub fn transform(src: &[u8], keep_declaration_line: bool) -> Vec<u8> {
    if keep_declaration_line {
        return src.to_vec();
    }
    strip_declaration_line(src)
}

/// Removes the first line whose trimmed content starts with [`DECLARATION_PREFIX`].
/// Later matching lines are left alone.
pub fn strip_declaration_line(src: &[u8]) -> Vec<u8> {
    let mut skipped = false;
    let kept: Vec<&[u8]> = src
        .split(|&b| b == b'\n')
        .filter(|line| {
            if !skipped && line.trim_ascii().starts_with(DECLARATION_PREFIX) {
                skipped = true;
                return false;
            }
            true
        })
        .collect();

    kept.join(&b'\n')
}
