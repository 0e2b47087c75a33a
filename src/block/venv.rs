use crate::{Block, Part, Segment, Theme};

/// Name of the active Python virtualenv
pub struct VirtualEnv(pub String);

impl Block for VirtualEnv {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        if self.0.is_empty() {
            return Vec::new();
        }
        vec![
            Segment::single(theme.colours.virtualenv, Part::untrusted(self.0.as_str()))
                .weighted(theme.weights.virtualenv),
        ]
    }
}
