//! The process-wide atomic tag set is shared by every test in a binary, so it
//! is only touched from this single test.

use markup_diff::{
    ConfigError, DEFAULT_ATOMIC_TAGS, configure_atomic_tags, current_atomic_tags, diff,
    reset_atomic_tags, tokenize,
};
use pretty_assertions::assert_eq;

#[test]
fn test_process_wide_atomic_tags() {
    let before = "<ul><li>one</li><li>two</li></ul>";
    let after = "<ul><li>one</li><li>three</li></ul>";

    assert_eq!(current_atomic_tags().pattern(), DEFAULT_ATOMIC_TAGS);
    assert_eq!(tokenize(before).len(), 8);
    assert_eq!(
        diff(before, after, None),
        r#"<ul><li>one</li><li><del data-operation-index="1">two</del><ins data-operation-index="1">three</ins></li></ul>"#
    );

    configure_atomic_tags("li, u(?!l)").unwrap();
    assert_eq!(tokenize(before).len(), 4);
    assert_eq!(
        diff(before, after, Some("change")),
        r#"<ul><li>one</li><del data-operation-index="1" class="change"><li>two</li></del><ins data-operation-index="1" class="change"><li>three</li></ins></ul>"#
    );

    assert!(matches!(
        configure_atomic_tags("li,(?<=x)y"),
        Err(ConfigError::UnsupportedLookaround { .. })
    ));
    assert!(matches!(
        configure_atomic_tags(""),
        Err(ConfigError::EmptyPattern { .. })
    ));
    assert_eq!(current_atomic_tags().pattern(), "li, u(?!l)");

    reset_atomic_tags();
    assert_eq!(current_atomic_tags().pattern(), DEFAULT_ATOMIC_TAGS);
    assert_eq!(tokenize(before).len(), 8);
}
