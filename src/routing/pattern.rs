//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse pattern strings like `/users/:id` into segments
//! - Match concrete paths segment by segment
//! - Capture named parameter values on match
//!
//! # Design Decisions
//! - Literal segments match exactly and case-sensitively
//! - No regex; matching is a single walk over the segments
//! - Trailing slashes on incoming paths are normalized away

use std::fmt;
use thiserror::Error;

/// Error type for pattern parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must start with '/': `{0}`")]
    MissingLeadingSlash(String),

    #[error("pattern contains an empty segment: `{0}`")]
    EmptySegment(String),

    #[error("pattern contains a parameter with no name: `{0}`")]
    EmptyParamName(String),

    #[error("parameter `{name}` is not a valid identifier in pattern `{pattern}`")]
    InvalidParamName { pattern: String, name: String },

    #[error("parameter `{name}` appears more than once in pattern `{pattern}`")]
    DuplicateParam { pattern: String, name: String },
}

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text, compared exactly.
    Literal(String),
    /// Named parameter (`:id`), binds the concrete segment on match.
    Param(String),
}

/// A parsed URL path pattern (e.g. `/users/:id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// The root pattern `/` parses to zero segments. A trailing slash is
    /// not part of the canonical form and is stripped.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let mut segments = Vec::new();
        let trimmed = pattern.trim_end_matches('/');

        // "/" trims to "" and yields no segments.
        for seg in trimmed.split('/').skip(1) {
            if seg.is_empty() {
                return Err(PatternError::EmptySegment(pattern.to_string()));
            }
            if let Some(name) = seg.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(pattern.to_string()));
                }
                if !is_identifier(name) {
                    return Err(PatternError::InvalidParamName {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                if segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(n) if n == name))
                {
                    return Err(PatternError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(seg.to_string()));
            }
        }

        let raw = if segments.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        };

        Ok(Self { raw, segments })
    }

    /// Canonical pattern text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the pattern contains at least one named parameter.
    pub fn has_params(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Param(_)))
    }

    /// Names of the parameters, in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a concrete path against this pattern.
    ///
    /// Returns the captured parameters on match, `None` otherwise.
    /// Segment counts must agree; literals compare case-sensitively.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (pattern_seg, path_seg) in self.segments.iter().zip(&path_segments) {
            match pattern_seg {
                Segment::Literal(lit) => {
                    if lit != path_seg {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.0.push((name.clone(), (*path_seg).to_string()));
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parameter values captured by a successful match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    /// Look up a captured value by parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl serde::Serialize for PathParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        let pattern = PathPattern::parse("/tenants").unwrap();
        assert_eq!(pattern.as_str(), "/tenants");
        assert!(!pattern.has_params());
    }

    #[test]
    fn test_parse_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert_eq!(pattern.as_str(), "/");
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/home").is_none());
    }

    #[test]
    fn test_parse_param() {
        let pattern = PathPattern::parse("/users/:id").unwrap();
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_parse_rejects_bad_patterns() {
        assert!(matches!(
            PathPattern::parse("users"),
            Err(PatternError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            PathPattern::parse("/users//new"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            PathPattern::parse("/users/:"),
            Err(PatternError::EmptyParamName(_))
        ));
        assert!(matches!(
            PathPattern::parse("/users/:user id"),
            Err(PatternError::InvalidParamName { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/pairs/:id/:id"),
            Err(PatternError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn test_match_static() {
        let pattern = PathPattern::parse("/tenants").unwrap();
        assert!(pattern.matches("/tenants").is_some());
        assert!(pattern.matches("/tenants/").is_some());
        assert!(pattern.matches("/Tenants").is_none()); // case-sensitive
        assert!(pattern.matches("/tenants/7").is_none());
    }

    #[test]
    fn test_match_captures_param() {
        let pattern = PathPattern::parse("/users/:id").unwrap();
        let params = pattern.matches("/users/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_match_requires_param_segment() {
        let pattern = PathPattern::parse("/users/:id").unwrap();
        assert!(pattern.matches("/users").is_none());
        assert!(pattern.matches("/users/42/extra").is_none());
    }

    #[test]
    fn test_trailing_slash_in_pattern_is_canonicalized() {
        let pattern = PathPattern::parse("/tenants/").unwrap();
        assert_eq!(pattern.as_str(), "/tenants");
    }
}
