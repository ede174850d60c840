//! Latest-per-minor-line selection

use crate::version::semver::SemanticVersion;

/// Select the newest release overall followed by the newest release of every
/// older minor line.
///
/// Pre-releases and versions below `min_version` are dropped. The result is
/// strictly descending by (major, minor) and holds one entry per minor line.
pub fn select_latest_versions(
    mut versions: Vec<SemanticVersion>,
    min_version: &SemanticVersion,
) -> Vec<SemanticVersion> {
    versions.sort_by_key(SemanticVersion::precedence);

    let floor = min_version.precedence();
    let mut selected: Vec<SemanticVersion> = Vec::new();

    for version in versions.into_iter().rev() {
        if version.is_pre_release() || version.precedence() < floor {
            continue;
        }
        // Descending traversal: the first survivor of a minor line is its max.
        if selected
            .last()
            .is_none_or(|last| !last.same_minor_line(&version))
        {
            selected.push(version);
        }
    }

    selected
}
