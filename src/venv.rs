use std::path::Path;

const GENERIC: [&str; 5] = [".venv", "venv", "env", ".env", "virtualenv"];

/// Display name of a virtualenv.
///
/// Environments are often created as `project/venv` or `project/.venv`; for those the project
/// directory names the environment. Top-level locations such as `/opt` are not projects, so
/// `/opt/venv` keeps its own name.
pub fn name(path: &Path) -> Option<String> {
    let base = path.file_name()?.to_string_lossy();
    if !GENERIC.contains(&&*base) {
        return Some(base.into_owned());
    }

    let project = path
        .parent()
        .filter(|parent| parent.parent().and_then(Path::parent).is_some())
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy())
        .filter(|name| !GENERIC.contains(&&**name));
    Some(project.unwrap_or(base).into_owned())
}
