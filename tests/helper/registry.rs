//! Registry test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use latest_versions::version::error::RegistryError;
use latest_versions::version::registry::Registry;

enum Response {
    Tags(Vec<String>),
    RateLimited,
    Hang,
}

/// Mock registry keyed by `owner/name`; unknown repositories are not found
#[derive(Default)]
pub struct MockRegistry {
    responses: HashMap<String, Response>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, repository: &str, tags: Vec<&str>) -> Self {
        self.responses.insert(
            repository.to_string(),
            Response::Tags(tags.into_iter().map(|t| t.to_string()).collect()),
        );
        self
    }

    pub fn with_rate_limit(mut self, repository: &str) -> Self {
        self.responses
            .insert(repository.to_string(), Response::RateLimited);
        self
    }

    /// The fetch for `repository` never completes
    pub fn with_hang(mut self, repository: &str) -> Self {
        self.responses.insert(repository.to_string(), Response::Hang);
        self
    }

    /// Repositories fetched so far with the requested page size
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_release_tags(
        &self,
        owner: &str,
        name: &str,
        per_page: u32,
    ) -> Result<Vec<String>, RegistryError> {
        let repository = format!("{}/{}", owner, name);
        self.calls
            .lock()
            .unwrap()
            .push((repository.clone(), per_page));

        match self.responses.get(&repository) {
            Some(Response::Tags(tags)) => Ok(tags.clone()),
            Some(Response::RateLimited) => Err(RegistryError::RateLimited {
                retry_after_secs: Some(60),
            }),
            Some(Response::Hang) => std::future::pending().await,
            None => Err(RegistryError::NotFound(repository)),
        }
    }
}
