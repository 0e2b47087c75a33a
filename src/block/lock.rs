use crate::{Block, Part, Segment, Theme};

/// Current directory is not writable
pub struct ReadOnly(pub bool);

impl Block for ReadOnly {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        if !self.0 {
            return Vec::new();
        }
        vec![
            Segment::single(theme.colours.lock, Part::trusted(theme.icons.read_only.as_str()))
                .weighted(theme.weights.lock),
        ]
    }
}
