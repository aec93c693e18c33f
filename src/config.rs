use std::sync::{LazyLock, PoisonError, RwLock};

use regex::{Regex, RegexBuilder};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Tags whose subtrees are compared as a whole unless configured otherwise.
pub const DEFAULT_ATOMIC_TAGS: &str = "iframe,object,math,svg,script,video,head,style";

static ATOMIC_TAGS: LazyLock<RwLock<AtomicTags>> =
    LazyLock::new(|| RwLock::new(AtomicTags::default()));

/// The set of tag names whose elements are treated as indivisible tokens.
///
/// The pattern is a comma-separated list of alternatives, each a regular
/// expression fragment matched against the *whole* tag name, ignoring case.
/// Because matching is exact, `u` never matches `ul`; the `u(?!l)` spelling
/// is accepted as well.
///
/// ```
/// use markup_diff::AtomicTags;
///
/// let tags = AtomicTags::new("li, u(?!l), h[1-6]").unwrap();
/// assert!(tags.matches("li"));
/// assert!(tags.matches("U"));
/// assert!(tags.matches("h3"));
/// assert!(!tags.matches("ul"));
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Debug, Clone)]
pub struct AtomicTags {
    pattern: String,
    regex: Regex,
}

impl AtomicTags {
    /// Compiles a comma-separated list of tag name alternatives.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the list is empty, uses unsupported
    /// lookaround, or is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let alternatives = pattern
            .split(',')
            .map(|alternative| alternative.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|alternative| !alternative.is_empty())
            .map(|alternative| strip_trailing_negative_lookahead(&alternative))
            .collect::<Result<Vec<_>, _>>()?;

        if alternatives.is_empty() {
            return Err(ConfigError::EmptyPattern {
                pattern: pattern.to_owned(),
            });
        }

        let joined = format!("^(?:{})$", alternatives.join("|"));
        let regex = RegexBuilder::new(&joined)
            .case_insensitive(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: joined.clone(),
                source,
            })?;

        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// Whether elements named `tag_name` are atomic.
    #[must_use]
    pub fn matches(&self, tag_name: &str) -> bool { self.regex.is_match(tag_name) }

    /// The pattern this set was created from.
    #[must_use]
    pub fn pattern(&self) -> &str { &self.pattern }
}

impl Default for AtomicTags {
    fn default() -> Self {
        static DEFAULT: LazyLock<AtomicTags> = LazyLock::new(|| {
            AtomicTags::new(DEFAULT_ATOMIC_TAGS)
                .unwrap_or_else(|error| unreachable!("invalid default atomic tags: {error}"))
        });

        DEFAULT.clone()
    }
}

impl PartialEq for AtomicTags {
    fn eq(&self, other: &Self) -> bool { self.pattern == other.pattern }
}

impl TryFrom<String> for AtomicTags {
    type Error = ConfigError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> { Self::new(&pattern) }
}

impl From<AtomicTags> for String {
    fn from(tags: AtomicTags) -> Self { tags.pattern }
}

/// Under whole-name matching a negative lookahead at the end of an
/// alternative can never fail, so it is dropped. Lookaround anywhere else
/// cannot be expressed with the `regex` crate.
fn strip_trailing_negative_lookahead(alternative: &str) -> Result<String, ConfigError> {
    let mut result = alternative;

    if let Some(start) = alternative.rfind("(?!") {
        let group = &alternative[start + 3..];
        let is_trailing_group = group
            .find(')')
            .is_some_and(|close| close == group.len() - 1 && !group[..close].contains('('));

        if is_trailing_group {
            result = &alternative[..start];
        }
    }

    if ["(?=", "(?!", "(?<=", "(?<!"]
        .iter()
        .any(|lookaround| result.contains(lookaround))
    {
        return Err(ConfigError::UnsupportedLookaround {
            alternative: alternative.to_owned(),
        });
    }

    Ok(result.to_owned())
}

/// Replaces the process-wide atomic tag set used by [`crate::tokenize`] and
/// [`crate::diff`].
///
/// # Errors
///
/// Returns a `ConfigError` if the pattern is invalid; the previous
/// configuration is kept in that case.
pub fn configure_atomic_tags(pattern: &str) -> Result<(), ConfigError> {
    let tags = AtomicTags::new(pattern)?;
    log::debug!("Configured atomic tags: {pattern}");
    *ATOMIC_TAGS.write().unwrap_or_else(PoisonError::into_inner) = tags;

    Ok(())
}

/// Restores the process-wide atomic tag set to [`DEFAULT_ATOMIC_TAGS`].
pub fn reset_atomic_tags() {
    *ATOMIC_TAGS.write().unwrap_or_else(PoisonError::into_inner) = AtomicTags::default();
}

/// A snapshot of the process-wide atomic tag set.
#[must_use]
pub fn current_atomic_tags() -> AtomicTags {
    ATOMIC_TAGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Options for a single comparison.
///
/// Without an explicit `atomic_tags`, the process-wide configuration at the
/// time of the call is used.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffOptions {
    /// Class added to every `<ins>` and `<del>` marker.
    pub marker_class: Option<String>,

    pub atomic_tags: Option<AtomicTags>,

    /// Fold single whitespace tokens between replacements into one
    /// replacement.
    pub absorb_whitespace: bool,
}

impl DiffOptions {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_marker_class(mut self, marker_class: impl Into<String>) -> Self {
        self.marker_class = Some(marker_class.into());
        self
    }

    #[must_use]
    pub fn with_atomic_tags(mut self, atomic_tags: AtomicTags) -> Self {
        self.atomic_tags = Some(atomic_tags);
        self
    }

    #[must_use]
    pub fn with_absorbed_whitespace(mut self, absorb_whitespace: bool) -> Self {
        self.absorb_whitespace = absorb_whitespace;
        self
    }
}
