/// A helper for building markup in-order while keeping every element
/// balanced. It tracks the stack of open elements so that a closing tag
/// closes whatever was opened after its partner, closing tags without an open
/// partner are dropped, and anything left open is closed when building.
///
/// Well-nested input passes through unchanged.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    buffer: String,
    open: Vec<String>,
}

impl MarkupBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        MarkupBuilder {
            buffer: String::with_capacity(capacity),
            open: Vec::new(),
        }
    }

    /// Append an opening tag of element `name`.
    pub fn open(&mut self, name: &str, tag: &str) {
        self.buffer.push_str(tag);
        self.open.push(name.to_owned());
    }

    /// Append a closing tag of element `name`, first closing any element
    /// opened inside it.
    pub fn close(&mut self, name: &str, tag: &str) {
        let Some(position) = self.open.iter().rposition(|open| open == name) else {
            log::debug!("Dropping closing tag without an open element: {tag}");
            return;
        };

        for inner in self.open.drain(position + 1..).rev() {
            log::debug!("Closing <{inner}> before </{name}>");
            self.buffer.push_str("</");
            self.buffer.push_str(&inner);
            self.buffer.push('>');
        }

        self.open.truncate(position);
        self.buffer.push_str(tag);
    }

    /// Append text or a self-contained element.
    pub fn push(&mut self, text: &str) { self.buffer.push_str(text); }

    /// Closes every element still open and returns the built markup.
    pub fn build(mut self) -> String {
        while let Some(name) = self.open.pop() {
            log::debug!("Closing <{name}> left open at the end of the document");
            self.buffer.push_str("</");
            self.buffer.push_str(&name);
            self.buffer.push('>');
        }

        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_well_nested_markup() {
        let mut builder = MarkupBuilder::default();

        builder.open("p", "<p class=\"x\">");
        builder.push("Hello ");
        builder.open("b", "<b>");
        builder.push("world");
        builder.close("b", "</b>");
        builder.push("<br>");
        builder.close("p", "</P>");

        assert_eq!(builder.build(), "<p class=\"x\">Hello <b>world</b><br></P>");
    }

    #[test]
    fn test_closes_inner_elements() {
        let mut builder = MarkupBuilder::default();

        builder.open("div", "<div>");
        builder.open("span", "<span>");
        builder.push("text");
        builder.close("div", "</div>");

        assert_eq!(builder.build(), "<div><span>text</span></div>");
    }

    #[test]
    fn test_drops_unmatched_closing_tags() {
        let mut builder = MarkupBuilder::with_capacity(16);

        builder.push("a");
        builder.close("p", "</p>");
        builder.open("i", "<i>");
        builder.close("b", "</b>");
        builder.push("b");

        assert_eq!(builder.build(), "a<i>b</i>");
    }

    #[test]
    fn test_empty() {
        assert_eq!(MarkupBuilder::default().build(), "");
    }
}
