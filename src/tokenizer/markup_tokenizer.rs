use super::{
    tag::{TagShape, element_end, is_tag_start, parse_tag, tag_end},
    token::{Token, TokenKind},
};
use crate::config::AtomicTags;

/// Longest entity name (between `&` and `;`) recognised as an entity.
const MAX_ENTITY_LENGTH: usize = 32;

const SPACE_ENTITY_NAMES: [&str; 4] = ["nbsp", "ensp", "emsp", "thinsp"];
const SPACE_CODE_POINTS: [u32; 5] = [0x20, 0xa0, 0x2002, 0x2003, 0x2009];

/// Splits markup into tags, words and whitespace. Elements whose name
/// matches `atomic_tags` become a single token including their content.
///
/// ## Example
///
/// ```not_rust
/// "<p>Hi&nbsp;there!</p>" -> ["<p>", "Hi", "&nbsp;", "there!", "</p>"]
/// ```
pub fn markup_tokenizer(text: &str, atomic_tags: &AtomicTags) -> Vec<Token> {
    let mut result = Vec::new();
    let mut position = 0;

    while position < text.len() {
        let rest = &text[position..];

        let (token, length) = if is_tag_start(rest) {
            read_tag(text, position, atomic_tags)
        } else if starts_with_whitespace(rest) {
            read_whitespace(rest)
        } else {
            read_word(rest)
        };

        result.push(token);
        position += length;
    }

    result
}

fn read_tag(text: &str, start: usize, atomic_tags: &AtomicTags) -> (Token, usize) {
    let end = tag_end(text, start);
    let raw = &text[start..end];

    let token = match parse_tag(raw) {
        TagShape::Open(name) if atomic_tags.matches(&name) => {
            let element_end = element_end(text, end, &name).unwrap_or_else(|| {
                log::warn!("Atomic element <{name}> is never closed, treating the rest as its content");
                text.len()
            });

            let element = &text[start..element_end];
            return (Token::verbatim(TokenKind::Atomic(name), element), element.len());
        }
        TagShape::Void(name) if atomic_tags.matches(&name) => {
            Token::verbatim(TokenKind::Atomic(name), raw)
        }
        TagShape::Open(name) => Token::verbatim(TokenKind::OpenTag(name), raw),
        TagShape::Close(name) => Token::verbatim(TokenKind::CloseTag(name), raw),
        TagShape::Void(name) => Token::verbatim(TokenKind::VoidTag(name), raw),
    };

    (token, raw.len())
}

fn read_whitespace(rest: &str) -> (Token, usize) {
    let mut end = 0;

    while end < rest.len() {
        if let Some(c) = rest[end..].chars().next().filter(|c| c.is_whitespace()) {
            end += c.len_utf8();
        } else if let Some(length) = space_entity_len(&rest[end..]) {
            end += length;
        } else {
            break;
        }
    }

    (Token::whitespace(&rest[..end]), end)
}

/// Reads a run of word characters including at most one trailing punctuation
/// character, or a single non-space entity.
fn read_word(rest: &str) -> (Token, usize) {
    if let Some(length) = entity_len(rest) {
        return (Token::verbatim(TokenKind::Word, &rest[..length]), length);
    }

    let mut end = 0;
    for (i, c) in rest.char_indices() {
        if i > 0
            && (c.is_whitespace() || is_tag_start(&rest[i..]) || entity_len(&rest[i..]).is_some())
        {
            break;
        }

        end = i + c.len_utf8();

        if !is_word_char(c) {
            break;
        }
    }

    (Token::verbatim(TokenKind::Word, &rest[..end]), end)
}

fn is_word_char(c: char) -> bool { c.is_alphanumeric() || matches!(c, '_' | '#' | '@') }

fn starts_with_whitespace(rest: &str) -> bool {
    rest.chars().next().is_some_and(char::is_whitespace) || space_entity_len(rest).is_some()
}

/// Byte length of the character entity at the start of `rest`, such as
/// `&amp;`, `&#160;` or `&#x2009;`.
fn entity_len(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('&')?;
    let (end, _) = body
        .char_indices()
        .take(MAX_ENTITY_LENGTH + 1)
        .find(|(_, c)| *c == ';')?;
    let name = &body[..end];

    let is_valid = match name.strip_prefix('#') {
        Some(code) => match code.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()),
        },
        None => {
            name.starts_with(|c: char| c.is_ascii_alphabetic())
                && name.chars().all(|c| c.is_ascii_alphanumeric())
        }
    };

    is_valid.then_some(end + 2)
}

/// Byte length of the entity at the start of `rest` if it renders as a space.
fn space_entity_len(rest: &str) -> Option<usize> {
    let length = entity_len(rest)?;
    let name = &rest[1..length - 1];

    let code_point = match name.strip_prefix('#') {
        Some(code) => match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        },
        None => return SPACE_ENTITY_NAMES.contains(&name).then_some(length),
    };

    code_point
        .is_some_and(|code_point| SPACE_CODE_POINTS.contains(&code_point))
        .then_some(length)
}
