use crate::{Block, Part, Segment, Theme};
use std::{
    borrow::Cow,
    path::{Component, Path},
};

/// Current directory as a list of names, with the home prefix collapsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathState {
    pub components: Vec<String>,
    pub under_home: bool,
}

impl PathState {
    /// Splits `work_dir`. A home of `/` is ignored, it would swallow every path.
    pub fn new(work_dir: &Path, home: Option<&Path>) -> Self {
        let rest = home
            .filter(|home| home.parent().is_some())
            .and_then(|home| work_dir.strip_prefix(home).ok());
        let under_home = rest.is_some();
        let components = rest
            .unwrap_or(work_dir)
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        Self {
            components,
            under_home,
        }
    }
}

/// Shortens `name` to `head…tail` when it has more than `max` characters.
///
/// Limits of 3 and below are too small to cut anything meaningful, so they disable shortening.
pub fn truncate<'a>(name: &'a str, max: usize, ellipsis: &str) -> Cow<'a, str> {
    let len = name.chars().count();
    if max <= 3 || len <= max {
        return Cow::Borrowed(name);
    }
    let half = max / 2 - 1;
    let head: String = name.chars().take(half).collect();
    let tail: String = name.chars().skip(len - half).collect();
    Cow::Owned(format!("{head}{ellipsis}{tail}"))
}

impl Block for PathState {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        let colours = &theme.colours.cwd;
        let weight = theme.weights.cwd;
        let ellipsis = &theme.icons.ellipsis;
        let mut segments = Vec::with_capacity(2);

        if self.under_home {
            segments.push(Segment::single(colours.home(), Part::trusted("~")).weighted(weight));
        }

        let Some((leaf, intermediate)) = self.components.split_last() else {
            if !self.under_home {
                segments.push(Segment::single(colours.normal(), Part::trusted("/")).weighted(weight));
            }
            return segments;
        };

        let component = |name: &str| Part::untrusted(truncate(name, theme.cwd_max_length, ellipsis));
        let parts = match intermediate {
            [] => vec![component(leaf)],
            [only] => vec![component(only), component(leaf)],
            [first, ..] => vec![
                component(first),
                Part::trusted(ellipsis.as_str()),
                component(leaf),
            ],
        };
        segments.extend(Segment::new(colours.normal(), parts).map(|segment| segment.weighted(weight)));
        segments
    }
}
