//! Registry trait for fetching release tags from a remote source

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for fetching the release tags of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches one page of release tags for `owner/name`
    ///
    /// # Arguments
    /// * `owner` - Repository owner (e.g., "coreos")
    /// * `name` - Repository name (e.g., "etcd")
    /// * `per_page` - Upper bound on the number of releases returned
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw tag names in the order the source lists them
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_release_tags(
        &self,
        owner: &str,
        name: &str,
        per_page: u32,
    ) -> Result<Vec<String>, RegistryError>;
}
