use crate::{Block, Part, Segment, Theme, segment::LAST};

/// Trailing prompt character. Always present, always last.
pub struct Dollar;

impl Block for Dollar {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        vec![Segment::single(theme.colours.dollar, Part::trusted(theme.dollar())).weighted(LAST)]
    }
}
