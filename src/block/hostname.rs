use crate::{Block, Colour, ColourPair, Part, Segment, Theme, block::truncate, theme::HostnameColour};

/// Machine the shell runs on, shown for remote sessions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host {
    pub hostname: String,
    pub username: Option<String>,
}

impl Block for Host {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        if self.hostname.is_empty() {
            return Vec::new();
        }

        let name = truncate(&self.hostname, theme.hostname_max_length, &theme.icons.ellipsis);
        let text = match &self.username {
            Some(user) if theme.show_username => format!("{user}@{name}"),
            _ => name.into_owned(),
        };

        let colours = theme.colours.hostname;
        let background = match theme.hostname_colour {
            HostnameColour::Fixed => colours.background,
            HostnameColour::Hash => Colour::of(&self.hostname),
        };
        let colours = ColourPair {
            background,
            text: colours.text,
        };

        vec![Segment::single(colours, Part::untrusted(text)).weighted(theme.weights.hostname)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, IconMode, Shell};

    fn host() -> Host {
        Host {
            hostname: "buildbox.example.org".into(),
            username: Some("gopher".into()),
        }
    }

    fn theme(config: Config) -> Theme {
        Theme::new(&config, Shell::Bash, IconMode::Plain)
    }

    #[test]
    fn with_username() {
        let theme = theme(Config {
            show_username: true,
            ..Config::default()
        });
        let segments = host().segments(&theme);
        assert_eq!(segments[0].texts(), ["gopher@buildbox.example.org"]);
        assert!(segments[0].parts()[0].requires_escaping);
        assert_eq!(segments[0].foreground, Colour(16));
        assert_eq!(segments[0].background, Colour(12));
    }

    #[test]
    fn without_username() {
        let segments = host().segments(&theme(Config::default()));
        assert_eq!(segments[0].texts(), ["buildbox.example.org"]);
    }

    #[test]
    fn truncated_before_username_is_added() {
        let theme = theme(Config {
            show_username: true,
            hostname_max_length: 10,
            ..Config::default()
        });
        assert_eq!(host().segments(&theme)[0].texts(), ["gopher@buil\u{2026}.org"]);
    }

    #[test]
    fn hashed_background_is_stable() {
        let theme = theme(Config {
            hostname_colour: HostnameColour::Hash,
            ..Config::default()
        });
        let first = host().segments(&theme);
        let second = host().segments(&theme);
        assert_eq!(first[0].background, Colour::of("buildbox.example.org"));
        assert_eq!(first, second);
        assert_eq!(first[0].foreground, theme.colours.hostname.text);
    }

    #[test]
    fn unknown_host_is_skipped() {
        let host = Host {
            hostname: String::new(),
            username: None,
        };
        assert!(host.segments(&theme(Config::default())).is_empty());
    }
}
