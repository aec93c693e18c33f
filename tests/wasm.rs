#![cfg(feature = "wasm")]

use markup_diff::wasm::*;
use pretty_assertions::assert_eq;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_html_diff() {
    assert_eq!(
        html_diff("input", "input 2", None),
        r#"input<ins data-operation-index="1"> 2</ins>"#
    );
    assert_eq!(
        html_diff("input", "input 2", Some("diff-result".to_owned())),
        r#"input<ins data-operation-index="1" class="diff-result"> 2</ins>"#
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_html_to_tokens() {
    assert_eq!(html_to_tokens("<p>Hi&nbsp;there, you!</p>"), vec![
        "<p>", "Hi", "&nbsp;", "there,", " ", "you!", "</p>"
    ]);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_calculate_operations() {
    assert_eq!(
        calculate_operations(r#"<img src="a.jpg">"#, r#"<img src="b.jpg">"#).ok(),
        Some(r#"[{"action":"replace","startInBefore":0,"endInBefore":0,"startInAfter":0,"endInAfter":0}]"#.to_owned())
    );
    assert_eq!(
        calculate_operations("input", "input 2").ok(),
        Some(r#"[{"action":"equal","startInBefore":0,"endInBefore":0,"startInAfter":0,"endInAfter":0},{"action":"insert","startInBefore":1,"startInAfter":1,"endInAfter":2}]"#.to_owned())
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_set_atomic_tags() {
    let before = "<ul><li>one</li></ul>";
    let after = "<ul><li>two</li></ul>";

    assert!(set_atomic_tags("li").is_ok());
    assert_eq!(html_to_tokens(before).len(), 3);
    assert_eq!(
        html_diff(before, after, None),
        r#"<ul><del data-operation-index="1"><li>one</li></del><ins data-operation-index="1"><li>two</li></ins></ul>"#
    );

    markup_diff::reset_atomic_tags();
}
