use anyhow::Result;
use pwd::Passwd;
use rustix::{
    fs::{self as rfs, Access},
    io::Errno,
};
use std::{fs, path::Path};
use tracing::debug;

/// First battery as the kernel reports it
pub const BATTERY_CAPACITY: &str = "/sys/class/power_supply/BAT0/capacity";

/// Whether the directory is known to be read-only.
///
/// Only an explicit denial counts. If the check itself cannot run, the directory is taken as
/// writable so that no lock shows up by mistake.
pub fn is_read_only(dir: &Path) -> bool {
    match rfs::access(dir, Access::WRITE_OK) {
        Ok(()) => false,
        Err(err) if [Errno::ACCESS, Errno::ROFS, Errno::PERM].contains(&err) => true,
        Err(err) => {
            debug!(dir = %dir.display(), %err, "writability probe failed");
            false
        }
    }
}

pub fn battery_capacity(path: &Path) -> Result<u8> {
    Ok(fs::read_to_string(path)?.trim().parse()?)
}

pub fn hostname() -> Option<String> {
    let name = rustix::system::uname()
        .nodename()
        .to_string_lossy()
        .into_owned();
    (!name.is_empty()).then_some(name)
}

/// Login name from the passwd database, for when `USER` is not set
pub fn current_user() -> Option<String> {
    let uid = rustix::process::getuid().as_raw();
    Passwd::iter()
        .find(|passwd| passwd.uid == uid)
        .map(|passwd| passwd.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fresh_dir_is_writable() {
        let dir = tempdir().unwrap();
        assert!(!is_read_only(dir.path()));
    }

    #[test]
    fn missing_dir_fails_open() {
        let dir = tempdir().unwrap();
        assert!(!is_read_only(&dir.path().join("gone")));
    }

    #[test]
    fn capacity_is_parsed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capacity");
        fs::write(&path, "42\n").unwrap();
        assert_eq!(battery_capacity(&path).unwrap(), 42);

        fs::write(&path, "full").unwrap();
        assert!(battery_capacity(&path).is_err());
        assert!(battery_capacity(&dir.path().join("nope")).is_err());
    }
}
