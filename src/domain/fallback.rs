use regex::Regex;

/// The `version = '...'` assignment inside an `else { }` block.
///
/// Group 1 is everything up to the opening quote, group 2 everything from the
/// closing quote through the `}`. The value itself sits between them.
const FALLBACK_PATTERN: &str = r"(else\s*\{\s*\n\s*version\s*=\s*')[^']+('\s*\n\s*\})";

/// Result of a successful fallback-version replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPatch {
    /// Full build file content with the value swapped
    pub content: String,
    /// The value that was there before
    pub previous: String,
}

/// Replaces the first fallback version in `content` with `version`.
///
/// Every byte outside the quoted value is kept as-is. Returns `None` when the
/// content has no fallback-version assignment.
pub fn replace_fallback_version(content: &str, version: &str) -> Option<FallbackPatch> {
    let re = Regex::new(FALLBACK_PATTERN).ok()?;
    let captures = re.captures(content)?;
    let head = captures.get(1)?;
    let tail = captures.get(2)?;

    let mut patched = String::with_capacity(content.len() + version.len());
    patched.push_str(&content[..head.end()]);
    patched.push_str(version);
    patched.push_str(&content[tail.start()..]);

    Some(FallbackPatch {
        content: patched,
        previous: content[head.end()..tail.start()].to_string(),
    })
}
