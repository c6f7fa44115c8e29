//! Source location tracking (byte offsets).

/// Half-open byte range into a source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span used for factory-synthesized nodes with no source position.
    pub const SYNTHESIZED: Span = Span { start: 0, end: 0 };

    pub const fn new(start: u32, end: u32) -> Span {
        Span { start, end }
    }

    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}
