//! Content glob compilation.
//!
//! Globs are translated to anchored regular expressions over `/`-separated
//! paths relative to the project root.
//!
//! | Syntax      | Matches                                   |
//! |-------------|-------------------------------------------|
//! | `*`         | any run of characters except `/`          |
//! | `?`         | one character except `/`                  |
//! | `**/`       | zero or more whole directories            |
//! | `**`        | anything, `/` included                    |
//! | `[abc]`     | one character from the class (`[!..]` negates) |
//! | `{a,b}`     | either alternative (nestable)             |
//! | `!pattern`  | exclusion (leading only)                  |

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlobError {
    #[error("empty glob pattern")]
    Empty,

    #[error("unclosed character class in `{0}`")]
    UnclosedClass(String),

    #[error("unclosed `{{` alternation in `{0}`")]
    UnclosedBrace(String),

    #[error("glob `{0}` does not compile")]
    Regex(String, #[source] regex::Error),
}

/// A compiled content glob.
#[derive(Debug, Clone)]
pub struct Glob {
    source: String,
    negated: bool,
    base: PathBuf,
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: &str) -> Result<Self, GlobError> {
        let (negated, body) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let body = strip_dot_slash(body);
        if body.is_empty() {
            return Err(GlobError::Empty);
        }

        let translated = translate(body)?;
        let regex =
            Regex::new(&translated).map_err(|e| GlobError::Regex(pattern.to_string(), e))?;

        Ok(Self {
            source: pattern.to_string(),
            negated,
            base: literal_base(body),
            regex,
        })
    }

    /// The pattern as written in the config.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// `true` for `!`-prefixed exclusion globs.
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Longest leading directory with no wildcard in it.
    ///
    /// Walking starts here instead of at the project root.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn is_absolute(&self) -> bool {
        self.base.is_absolute()
    }

    /// Match a `/`-separated path.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

fn strip_dot_slash(mut pattern: &str) -> &str {
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

const META: &[char] = &['*', '?', '[', '{', '\\'];

fn literal_base(pattern: &str) -> PathBuf {
    let segments: Vec<&str> = pattern.split('/').collect();
    let literal = segments
        .iter()
        .take_while(|s| !s.contains(META))
        .count();

    // A fully literal pattern names a file; its parent is the base.
    let take = if literal == segments.len() {
        literal.saturating_sub(1)
    } else {
        literal
    };

    let joined = segments[..take].join("/");
    if pattern.starts_with('/') && joined.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(joined)
    }
}

fn translate(pattern: &str) -> Result<String, GlobError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    out.push('^');

    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                let segment_start = i == 0 || chars[i - 1] == '/';
                if segment_start && chars.get(i + 2) == Some(&'/') {
                    out.push_str("(?:[^/]*/)*");
                    i += 3;
                } else {
                    out.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            '[' => {
                i = push_class(&chars, i, &mut out)
                    .ok_or_else(|| GlobError::UnclosedClass(pattern.to_string()))?;
            }
            '{' => {
                depth += 1;
                out.push_str("(?:");
                i += 1;
            }
            ',' if depth > 0 => {
                out.push('|');
                i += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                out.push(')');
                i += 1;
            }
            '\\' if i + 1 < chars.len() => {
                out.push_str(&regex::escape(&chars[i + 1].to_string()));
                i += 2;
            }
            c => {
                out.push_str(&regex::escape(&c.to_string()));
                i += 1;
            }
        }
    }

    if depth > 0 {
        return Err(GlobError::UnclosedBrace(pattern.to_string()));
    }

    out.push('$');
    Ok(out)
}

/// Push a `[...]` class starting at `start`; returns the index after `]`.
fn push_class(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    let mut i = start + 1;
    let negated = matches!(chars.get(i), Some('!' | '^'));
    if negated {
        i += 1;
    }

    let body_start = i;
    // `]` right after the opening bracket is a literal member.
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    while i < chars.len() && chars[i] != ']' {
        i += 1;
    }
    if i >= chars.len() {
        return None;
    }

    out.push('[');
    if negated {
        out.push('^');
    }
    for &c in &chars[body_start..i] {
        if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^') {
            out.push('\\');
        }
        out.push(c);
    }
    // Classes never cross a directory boundary.
    if negated {
        out.push('/');
    }
    out.push(']');
    Some(i + 1)
}

/// Render a path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::CurDir => {}
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}
