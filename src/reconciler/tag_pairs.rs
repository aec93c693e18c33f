use crate::tokenizer::token::{Token, TokenKind};

/// For every opening and closing tag, the index of its partner.
///
/// A closing tag pairs with the innermost unpaired opening tag of the same
/// name; opening tags skipped over that way stay unpaired, and so do closing
/// tags with no open counterpart. Leaves never have a partner.
#[must_use]
pub fn tag_pairs(tokens: &[Token]) -> Vec<Option<usize>> {
    let mut partners = vec![None; tokens.len()];
    let mut open: Vec<(&str, usize)> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token.kind() {
            TokenKind::OpenTag(name) => open.push((name.as_str(), index)),
            TokenKind::CloseTag(name) => {
                if let Some(position) = open.iter().rposition(|(open_name, _)| *open_name == name.as_str()) {
                    let (_, partner) = open[position];
                    partners[index] = Some(partner);
                    partners[partner] = Some(index);
                    open.truncate(position);
                }
            }
            _ => {}
        }
    }

    partners
}
