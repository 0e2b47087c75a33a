use crate::{block::VcsStatus, git::run};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Mercurial status of `work_dir`; `None` when hg is missing or this is not a repository
pub fn status(work_dir: &Path) -> Option<VcsStatus> {
    match probe(work_dir) {
        Ok(status) => Some(status),
        Err(err) => {
            debug!("hg unavailable: {err:#}");
            None
        }
    }
}

fn probe(work_dir: &Path) -> Result<VcsStatus> {
    let branch = run(work_dir, "hg", &["branch"])?;
    let mut status = parse_status(&run(work_dir, "hg", &["status"])?);
    status.branch = Some(branch.trim().to_owned());
    status.conflicted = run(work_dir, "hg", &["resolve", "--list"])
        .map(|list| count_unresolved(&list))
        .unwrap_or_default();
    status.phases = run(
        work_dir,
        "hg",
        &["log", "--rev", "draft()", "--template", "."],
    )
    .map(|dots| dots.trim().len())
    .unwrap_or_default();
    Ok(status)
}

pub fn parse_status(text: &str) -> VcsStatus {
    let mut status = VcsStatus::default();
    for line in text.lines() {
        match line.chars().next() {
            Some('M') => status.modified += 1,
            Some('A') => status.added += 1,
            Some('R' | '!') => status.removed += 1,
            Some('?') => status.untracked += 1,
            _ => {}
        }
    }
    status
}

fn count_unresolved(list: &str) -> usize {
    list.lines().filter(|line| line.starts_with("U ")).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_states() {
        let status = parse_status("M a.py\nA b.py\nR c.py\n! d.py\n? e.py\n? f.py\nC clean.py\n");
        assert_eq!(status.modified, 1);
        assert_eq!(status.added, 1);
        assert_eq!(status.removed, 2);
        assert_eq!(status.untracked, 2);
        assert!(status.branch.is_none());
    }

    #[test]
    fn unresolved_files() {
        assert_eq!(count_unresolved("U a.py\nR b.py\nU c.py\n"), 2);
        assert_eq!(count_unresolved(""), 0);
    }
}
