use markup_diff::{Action, AtomicTags, Operation, align, tokenize_with};
use pretty_assertions::assert_eq;
use test_case::test_case;

const MATH_B2: &str = r#"<math data-uuid="55784cd906504787a8e459e80e3bb554"><msqrt><msup><mi>b</mi><mn>2</mn></msup></msqrt></math>"#;
const MATH_B5: &str = r#"<math data-uuid="55784cd906504787a8e459e80e3bb554"><msqrt><msup><mn>b</mn><mn>5</mn></msup></msqrt></math>"#;
const MATH_OTHER_UUID: &str = r#"<math data-uuid="15568cd906504876548459e80e356878"><msqrt><msup><mi>b</mi><mn>2</mn></msup></msqrt></math>"#;

const VIDEO_WEBM: &str = r#"<video data-uuid="0787866ab5494d88b4b1ee423453224b"><source src="inkling-video:///big_buck_bunny/webm_high" type="video/webm" /></video>"#;
const VIDEO_MP4: &str = r#"<video data-uuid="0787866ab5494d88b4b1ee423453224b"><source src="inkling-video:///big_buck_rabbit/mp4" type="video/webm" /></video>"#;
const VIDEO_OTHER_UUID: &str = r#"<video data-uuid="65656565655487787484545454548494"><source src="inkling-video:///big_buck_bunny/webm_high" type="video/webm" /></video>"#;

fn single_token_operation(action: Action) -> Operation {
    Operation {
        action,
        start_in_before: 0,
        end_in_before: Some(0),
        start_in_after: 0,
        end_in_after: Some(0),
    }
}

#[test_case(r#"<img src="a.jpg">"#, r#"<img src="b.jpg">"#, Action::Replace ; "image source changed")]
#[test_case(r#"<img src="a.jpg">"#, r#"<img src="a.jpg" alt="hey!">"#, Action::Replace ; "image property added")]
#[test_case(r#"<img src="a.jpg">"#, r#"<img src="a.jpg">"#, Action::Equal ; "image unchanged")]
#[test_case(r#"<object data="a.jpg"></object>"#, r#"<object data="b.jpg"></object>"#, Action::Replace ; "widget data changed")]
#[test_case(r#"<object data="a.jpg"><param>yo!</param></object>"#, r#"<object data="a.jpg"></object>"#, Action::Replace ; "widget metadata removed")]
#[test_case(r#"<object data="a.jpg"></object>"#, r#"<object data="a.jpg"></object>"#, Action::Equal ; "widget unchanged")]
#[test_case(MATH_B2, MATH_B5, Action::Replace ; "math content changed")]
#[test_case(MATH_OTHER_UUID, MATH_B2, Action::Replace ; "math metadata changed")]
#[test_case(MATH_OTHER_UUID, MATH_OTHER_UUID, Action::Equal ; "math unchanged")]
#[test_case(VIDEO_WEBM, VIDEO_MP4, Action::Replace ; "video source changed")]
#[test_case(VIDEO_OTHER_UUID, VIDEO_WEBM, Action::Replace ; "video metadata changed")]
#[test_case(VIDEO_OTHER_UUID, VIDEO_OTHER_UUID, Action::Equal ; "video unchanged")]
#[test_case(r#"<iframe src="a.jpg"></iframe>"#, r#"<iframe src="b.jpg"></iframe>"#, Action::Replace ; "iframe source changed")]
#[test_case(r#"<iframe src="a.jpg"></iframe>"#, r#"<iframe src="a.jpg" class="foo"></iframe>"#, Action::Replace ; "iframe class added")]
#[test_case(r#"<iframe src="a.jpg"></iframe>"#, r#"<iframe src="a.jpg"></iframe>"#, Action::Equal ; "iframe unchanged")]
fn test_single_element_documents(before: &str, after: &str, action: Action) {
    let atomic_tags = AtomicTags::default();
    let operations = align(
        &tokenize_with(before, &atomic_tags),
        &tokenize_with(after, &atomic_tags),
    );

    assert_eq!(operations, vec![single_token_operation(action)]);
}

#[test]
fn test_atomic_element_is_one_operation() {
    let atomic_tags = AtomicTags::default();
    let before = tokenize_with(r#"<p>See <svg><circle r="1"/></svg> here</p>"#, &atomic_tags);
    let after = tokenize_with(r#"<p>See <svg><circle r="2"/></svg> here</p>"#, &atomic_tags);

    assert_eq!(before.len(), 7);
    assert_eq!(align(&before, &after), vec![
        Operation {
            action: Action::Equal,
            start_in_before: 0,
            end_in_before: Some(2),
            start_in_after: 0,
            end_in_after: Some(2),
        },
        Operation {
            action: Action::Replace,
            start_in_before: 3,
            end_in_before: Some(3),
            start_in_after: 3,
            end_in_after: Some(3),
        },
        Operation {
            action: Action::Equal,
            start_in_before: 4,
            end_in_before: Some(6),
            start_in_after: 4,
            end_in_after: Some(6),
        },
    ]);
}

#[test]
fn test_operations_follow_both_documents() {
    let atomic_tags = AtomicTags::default();
    let before = tokenize_with("<p>The cat sat on the mat.</p><p>Fin</p>", &atomic_tags);
    let after = tokenize_with("<p>A cat sat on a red mat!</p>", &atomic_tags);
    let operations = align(&before, &after);

    let (mut before_position, mut after_position) = (0, 0);
    for operation in &operations {
        assert_eq!(operation.start_in_before, before_position);
        assert_eq!(operation.start_in_after, after_position);
        before_position = operation.before_range().end;
        after_position = operation.after_range().end;
    }

    assert_eq!((before_position, after_position), (before.len(), after.len()));
}
