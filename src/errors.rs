use thiserror::Error;

/// Error type for invalid atomic tag configurations. Raised when the pattern
/// is set, never while diffing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The pattern contains no tag name alternatives at all
    #[error("Invalid atomic tag pattern: no tag names in `{pattern}`")]
    EmptyPattern {
        /// The rejected pattern
        pattern: String,
    },

    /// An alternative uses lookaround somewhere other than a trailing
    /// negative lookahead
    #[error(
        "Invalid atomic tag pattern: lookaround is only supported as a trailing `(?!...)`, \
         found `{alternative}`"
    )]
    UnsupportedLookaround {
        /// The offending comma-separated alternative
        alternative: String,
    },

    /// The pattern is not a valid regular expression
    #[error("Invalid atomic tag pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern after joining the alternatives
        pattern: String,
        /// The error reported by the regex engine
        source: regex::Error,
    },
}
