/// One of the two compared documents, and the marker used for content found
/// only in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl Side {
    /// Name of the element wrapping content present only on this side.
    #[must_use]
    pub fn marker_tag(self) -> &'static str {
        match self {
            Side::Before => "del",
            Side::After => "ins",
        }
    }
}
