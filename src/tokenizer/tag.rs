//! Recognition of single tags inside markup text.

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// The role of a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagShape {
    Open(String),
    Close(String),
    Void(String),
}

/// Elements that never have a closing tag.
fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Whether `rest` starts with a tag rather than a literal `<`.
pub fn is_tag_start(rest: &str) -> bool {
    let mut chars = rest.chars();

    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Returns the byte index just after the tag starting at `start`. A `>` inside
/// a quoted attribute value does not end the tag. Unterminated tags run to the
/// end of the text.
pub fn tag_end(text: &str, start: usize) -> usize {
    let rest = &text[start..];

    if let Some(comment) = rest.strip_prefix(COMMENT_START) {
        return comment.find(COMMENT_END).map_or(text.len(), |i| {
            start + COMMENT_START.len() + i + COMMENT_END.len()
        });
    }

    let mut quote = None;
    let mut after_equals = false;
    for (i, c) in rest.char_indices().skip(1) {
        match (quote, c) {
            (Some(open), _) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') if after_equals => quote = Some(c),
            (None, '>') => return start + i + 1,
            _ => {}
        }

        if !c.is_whitespace() {
            after_equals = c == '=';
        }
    }

    text.len()
}

/// Classifies a complete tag such as `<p>`, `</p>` or `<br/>`. Void elements
/// never hold content, so an explicit `</img>` or `</br>` is a void tag too.
pub fn parse_tag(raw: &str) -> TagShape {
    let (is_close, body) = match raw.strip_prefix("</") {
        Some(body) => (true, body),
        None => (false, raw.get(1..).unwrap_or_default()),
    };

    let name = body
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '/' && *c != '>')
        .collect::<String>()
        .to_ascii_lowercase();

    if is_close && !is_void_element(&name) {
        TagShape::Close(name)
    } else if name.starts_with(['!', '?'])
        || raw.trim_end_matches('>').trim_end().ends_with('/')
        || is_void_element(&name)
    {
        TagShape::Void(name)
    } else {
        TagShape::Open(name)
    }
}

/// Finds the byte index just after the close tag matching an element named
/// `name` whose opening tag ends at `content_start`. Nested elements with the
/// same name are skipped over.
pub fn element_end(text: &str, content_start: usize, name: &str) -> Option<usize> {
    let mut depth = 1_usize;
    let mut position = content_start;

    while let Some(offset) = text[position..].find('<') {
        let start = position + offset;
        if !is_tag_start(&text[start..]) {
            position = start + 1;
            continue;
        }

        let end = tag_end(text, start);
        match parse_tag(&text[start..end]) {
            TagShape::Open(other) if other == name => depth += 1,
            TagShape::Close(other) if other == name => {
                depth -= 1;
                if depth == 0 {
                    return Some(end);
                }
            }
            _ => {}
        }

        position = end;
    }

    None
}
