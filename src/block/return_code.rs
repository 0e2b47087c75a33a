use crate::{Block, Part, Segment, Theme};

/// Exit status of the previous command
pub struct ReturnCode(pub i32);

impl Block for ReturnCode {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        if self.0 == 0 {
            return Vec::new();
        }
        vec![
            Segment::single(theme.colours.returncode, Part::trusted(self.0.to_string()))
                .weighted(theme.weights.returncode),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, IconMode, Shell};

    #[test]
    fn success_is_silent() {
        let theme = Theme::new(&Config::default(), Shell::Bash, IconMode::Plain);
        assert!(ReturnCode(0).segments(&theme).is_empty());
    }

    #[test]
    fn failure_shows_code() {
        let theme = Theme::new(&Config::default(), Shell::Bash, IconMode::Plain);
        let segments = ReturnCode(127).segments(&theme);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].texts(), ["127"]);
        assert_eq!(segments[0].foreground, theme.colours.returncode.text);
        assert_eq!(segments[0].background, theme.colours.returncode.background);
    }
}
