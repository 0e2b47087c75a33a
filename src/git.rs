use crate::block::VcsStatus;
use anyhow::{Context as _, Result, bail};
use std::{path::Path, process::Command};
use tracing::debug;

/*
`git status --porcelain --branch` looks like

    ## feature...origin/feature [ahead 1, behind 2]
     M modified.rs
    A  added.rs
    D  removed.rs
    DD conflicted.rs
    ?? untracked.rs

with the two-letter code being index and worktree state
*/

/// Index/worktree pairs of an unmerged path
const UNMERGED: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Runs a VCS command in `work_dir` and returns its stdout
pub(crate) fn run(work_dir: &Path, program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(work_dir)
        .env("LC_ALL", "C")
        .env("GIT_OPTIONAL_LOCKS", "0")
        .env("HGPLAIN", "1")
        .output()
        .with_context(|| format!("spawn {program}"))?;
    if !output.status.success() {
        bail!("{program} {} exited with {}", args.join(" "), output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Git status of `work_dir`; `None` when git is missing or this is not a repository
pub fn status(work_dir: &Path) -> Option<VcsStatus> {
    match probe(work_dir) {
        Ok(status) => Some(status),
        Err(err) => {
            debug!("git unavailable: {err:#}");
            None
        }
    }
}

fn probe(work_dir: &Path) -> Result<VcsStatus> {
    let porcelain = run(
        work_dir,
        "git",
        &["status", "--porcelain", "--branch", "--ignore-submodules"],
    )?;
    let mut status = parse_porcelain(&porcelain);
    if status.detached {
        status.branch = run(work_dir, "git", &["rev-parse", "--short", "HEAD"])
            .ok()
            .map(|id| id.trim().to_owned());
    }
    Ok(status)
}

pub fn parse_porcelain(text: &str) -> VcsStatus {
    let mut status = VcsStatus::default();
    for line in text.lines() {
        if let Some(header) = line.strip_prefix("## ") {
            parse_branch(header, &mut status);
            continue;
        }
        let Some(code) = line.get(..2) else {
            continue;
        };
        match code {
            "??" => status.untracked += 1,
            "!!" => {}
            _ => {
                if UNMERGED.contains(&code) {
                    status.conflicted += 1;
                }
                let has = |state: char| code.contains(state);
                status.added += usize::from(has('A'));
                status.modified += usize::from(has('M'));
                status.removed += usize::from(has('D'));
                status.renamed += usize::from(has('R'));
            }
        }
    }
    status
}

fn parse_branch(header: &str, status: &mut VcsStatus) {
    if header.starts_with("HEAD (no branch)") {
        status.detached = true;
        return;
    }

    let header = header
        .strip_prefix("No commits yet on ")
        .or_else(|| header.strip_prefix("Initial commit on "))
        .unwrap_or(header);
    let (names, tracking) = match header.split_once(" [") {
        Some((names, tracking)) => (names, tracking.trim_end_matches(']')),
        None => (header, ""),
    };
    let local = names.split_once("...").map_or(names, |(local, _)| local);
    status.branch = Some(local.to_owned());

    for item in tracking.split(", ") {
        if let Some(count) = item.strip_prefix("ahead ") {
            status.ahead = count.parse().unwrap_or_default();
        } else if let Some(count) = item.strip_prefix("behind ") {
            status.behind = count.parse().unwrap_or_default();
        }
    }
}
