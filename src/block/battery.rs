use crate::{Block, Part, Segment, Theme};

/// Charge of the first battery, in percent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Battery {
    pub capacity: u8,
}

impl Block for Battery {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        let warn = theme.battery_warn;
        if warn == 0 || self.capacity > warn {
            return Vec::new();
        }
        vec![
            Segment::single(theme.colours.battery, Part::trusted(format!("{}%", self.capacity)))
                .weighted(theme.weights.battery),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, IconMode, Shell};

    fn theme(battery_warn: u8) -> Theme {
        let config = Config {
            battery_warn,
            ..Config::default()
        };
        Theme::new(&config, Shell::Bash, IconMode::Plain)
    }

    #[test]
    fn warns_at_or_below_threshold() {
        let theme = theme(20);
        assert!(Battery { capacity: 21 }.segments(&theme).is_empty());
        assert_eq!(Battery { capacity: 20 }.segments(&theme)[0].texts(), ["20%"]);
        assert_eq!(Battery { capacity: 5 }.segments(&theme)[0].texts(), ["5%"]);
    }

    #[test]
    fn zero_threshold_disables() {
        assert!(Battery { capacity: 0 }.segments(&theme(0)).is_empty());
    }
}
