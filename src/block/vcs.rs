use crate::{Block, ColourPair, Icons, Part, Segment, Theme, theme::VcsColours};

/// Working copy summary. Git and Mercurial fill in the same fields; hg alone knows phases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VcsStatus {
    /// Branch name, or abbreviated commit when detached
    pub branch: Option<String>,
    pub detached: bool,
    pub ahead: usize,
    pub behind: usize,
    /// Draft changesets
    pub phases: usize,
    pub added: usize,
    pub modified: usize,
    pub renamed: usize,
    pub untracked: usize,
    pub removed: usize,
    pub conflicted: usize,
}

impl VcsStatus {
    pub fn is_changed(&self) -> bool {
        [
            self.ahead,
            self.behind,
            self.added,
            self.modified,
            self.renamed,
            self.untracked,
            self.removed,
            self.conflicted,
        ]
        .iter()
        .any(|&count| count > 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VcsKind {
    Git,
    Hg,
}

impl VcsKind {
    /// Branch name which is shown without an icon
    fn trunk(self) -> &'static str {
        match self {
            Self::Git => "master",
            Self::Hg => "default",
        }
    }

    fn colours(self, theme: &Theme) -> &VcsColours {
        match self {
            Self::Git => &theme.colours.git,
            Self::Hg => &theme.colours.hg,
        }
    }

    fn weight(self, theme: &Theme) -> i32 {
        match self {
            Self::Git => theme.weights.git,
            Self::Hg => theme.weights.hg,
        }
    }
}

pub struct Vcs {
    pub kind: VcsKind,
    pub status: VcsStatus,
}

impl Vcs {
    pub fn git(status: VcsStatus) -> Self {
        Self {
            kind: VcsKind::Git,
            status,
        }
    }

    pub fn hg(status: VcsStatus) -> Self {
        Self {
            kind: VcsKind::Hg,
            status,
        }
    }

    fn branch(&self, icons: &Icons) -> Option<Part> {
        let name = self.status.branch.as_deref().filter(|name| !name.is_empty())?;
        let text = if self.status.detached {
            format!("{} {name}", icons.detached)
        } else if name == self.kind.trunk() {
            name.to_owned()
        } else {
            format!("{} {name}", icons.branch)
        };
        Some(Part::untrusted(text))
    }
}

/// Distance to upstream always carries the number, `1⇑` included
fn distance(ahead: usize, behind: usize, icons: &Icons) -> Option<Part> {
    let text = [(ahead, &icons.ahead), (behind, &icons.behind)]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, icon)| format!("{count}{icon}"))
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then(|| Part::trusted(text))
}

/// A single file is just the icon, more get the count in front
fn count(count: usize, icon: &str) -> Option<Part> {
    match count {
        0 => None,
        1 => Some(Part::trusted(icon)),
        n => Some(Part::trusted(format!("{n}{icon}"))),
    }
}

impl Block for Vcs {
    fn segments(&self, theme: &Theme) -> Vec<Segment> {
        let icons = &theme.icons;
        let status = &self.status;
        let colours = self.kind.colours(theme);
        let background = if status.is_changed() {
            colours.background_changes
        } else {
            colours.background_default
        };

        let mut parts = Vec::new();
        parts.extend(self.branch(icons));
        parts.extend(distance(status.ahead, status.behind, icons));
        parts.extend(
            [
                (status.phases, &icons.phases),
                (status.added, &icons.added),
                (status.modified, &icons.modified),
                (status.renamed, &icons.renamed),
                (status.untracked, &icons.untracked),
                (status.removed, &icons.removed),
                (status.conflicted, &icons.conflicted),
            ]
            .into_iter()
            .filter_map(|(n, icon)| count(n, icon)),
        );

        let colours = ColourPair {
            background,
            text: colours.text,
        };
        Segment::new(colours, parts)
            .map(|segment| segment.weighted(self.kind.weight(theme)))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, IconMode, Shell};

    fn theme() -> Theme {
        Theme::new(&Config::default(), Shell::Bash, IconMode::Plain)
    }

    fn on_master() -> VcsStatus {
        VcsStatus {
            branch: Some("master".into()),
            ..VcsStatus::default()
        }
    }

    #[test]
    fn clean_trunk_is_bare_on_default_colour() {
        let theme = theme();
        let segments = Vcs::git(on_master()).segments(&theme);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].texts(), ["master"]);
        assert_eq!(segments[0].background, theme.colours.git.background_default);
        assert_eq!(segments[0].foreground, theme.colours.git.text);
        assert!(segments[0].parts()[0].requires_escaping);
    }

    #[test]
    fn changes_share_one_chip_in_fixed_order() {
        let theme = theme();
        let icons = &theme.icons;
        let status = VcsStatus {
            added: 1,
            modified: 1,
            untracked: 1,
            removed: 2,
            conflicted: 1,
            ..on_master()
        };
        let segments = Vcs::git(status).segments(&theme);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].background, theme.colours.git.background_changes);
        assert_eq!(
            segments[0].texts(),
            [
                "master",
                icons.added.as_str(),
                icons.modified.as_str(),
                icons.untracked.as_str(),
                format!("2{}", icons.removed).as_str(),
                icons.conflicted.as_str(),
            ]
        );
    }

    #[test]
    fn every_count_changes_colour() {
        let theme = theme();
        let setters: [fn(&mut VcsStatus); 8] = [
            |s| s.ahead = 1,
            |s| s.behind = 1,
            |s| s.added = 1,
            |s| s.modified = 1,
            |s| s.renamed = 1,
            |s| s.untracked = 1,
            |s| s.removed = 1,
            |s| s.conflicted = 1,
        ];
        for set in setters {
            let mut status = on_master();
            set(&mut status);
            let segments = Vcs::git(status).segments(&theme);
            assert_eq!(segments[0].background, theme.colours.git.background_changes);
        }
    }

    #[test]
    fn counts_above_one_carry_the_number() {
        let theme = theme();
        let icons = &theme.icons;
        let status = VcsStatus {
            added: 3,
            modified: 12,
            renamed: 1,
            ..on_master()
        };
        let segments = Vcs::git(status).segments(&theme);
        assert_eq!(
            segments[0].texts()[1..],
            [
                format!("3{}", icons.added).as_str(),
                format!("12{}", icons.modified).as_str(),
                icons.renamed.as_str(),
            ]
        );
    }

    #[test]
    fn distance_keeps_number_at_one() {
        let theme = theme();
        let icons = &theme.icons;
        let ahead = Vcs::git(VcsStatus {
            ahead: 1,
            ..on_master()
        })
        .segments(&theme);
        assert_eq!(ahead[0].texts(), ["master", format!("1{}", icons.ahead).as_str()]);

        let both = Vcs::git(VcsStatus {
            ahead: 2,
            behind: 3,
            modified: 1,
            ..on_master()
        })
        .segments(&theme);
        assert_eq!(
            both[0].texts(),
            [
                "master",
                format!("2{} 3{}", icons.ahead, icons.behind).as_str(),
                icons.modified.as_str(),
            ]
        );
    }

    #[test]
    fn feature_branch_and_detached_get_icons() {
        let theme = theme();
        let icons = &theme.icons;
        let feature = VcsStatus {
            branch: Some("feature/$x".into()),
            ..VcsStatus::default()
        };
        assert_eq!(
            Vcs::git(feature).segments(&theme)[0].texts(),
            [format!("{} feature/$x", icons.branch).as_str()]
        );

        let detached = VcsStatus {
            branch: Some("1a2b3c4".into()),
            detached: true,
            ..VcsStatus::default()
        };
        assert_eq!(
            Vcs::git(detached).segments(&theme)[0].texts(),
            [format!("{} 1a2b3c4", icons.detached).as_str()]
        );
    }

    #[test]
    fn hg_trunk_and_phases() {
        let theme = theme();
        let status = VcsStatus {
            branch: Some("default".into()),
            phases: 2,
            ..VcsStatus::default()
        };
        let segments = Vcs::hg(status).segments(&theme);
        assert_eq!(segments[0].texts(), ["default", "2+"]);
        assert_eq!(segments[0].background, theme.colours.hg.background_default);

        let on_master = Vcs::hg(on_master()).segments(&theme);
        assert_eq!(
            on_master[0].texts(),
            [format!("{} master", theme.icons.branch).as_str()]
        );
    }

    #[test]
    fn nothing_known_means_no_chip() {
        assert!(Vcs::git(VcsStatus::default()).segments(&theme()).is_empty());
    }
}
