//! # Layout Loader
//!
//! Fetch, parse and validate a layout in one step.
//!
//! A load either yields a validated [`ConfigDocument`] or nothing. Fetch, parse
//! and validation failures are all logged and collapse into "no usable
//! document" for the caller; [`ConfigLoader::try_load`] keeps the typed error
//! for callers that want it.

use super::fetch::ResourceFetcher;
use super::validator::check_and_log;
use super::{parse_document, ConfigDocument};
use crate::registry::{TypeDescriptor, TypeRegistry};
use crate::session::SessionConfig;
use crate::{MatchError, MatchResult};
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Loads layout documents through a [`ResourceFetcher`].
///
/// # Examples
///
/// ```
/// use memory_match::{ConfigLoader, EmbeddedFetcher, TypeRegistry};
///
/// let loader = ConfigLoader::new(EmbeddedFetcher::bundled());
/// let registry = TypeRegistry::standard();
/// let document = loader.load("gameConfig.json", Some(&registry));
/// assert!(document.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader<F> {
    fetcher: F,
    session: SessionConfig,
}

impl<F: ResourceFetcher> ConfigLoader<F> {
    /// Creates a loader with the default session settings.
    pub fn new(fetcher: F) -> Self {
        Self::with_session(fetcher, SessionConfig::default())
    }

    /// Creates a loader for a specific session.
    pub fn with_session(fetcher: F, session: SessionConfig) -> Self {
        Self { fetcher, session }
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The session this loader was built for.
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    /// Loads `resource`, returning the typed failure.
    pub fn try_load<D: TypeDescriptor>(
        &self,
        resource: &str,
        registry: Option<&TypeRegistry<D>>,
    ) -> MatchResult<ConfigDocument> {
        debug!("ConfigLoader: fetching '{}'", self.fetcher.locate(resource));
        let text = self.fetcher.fetch(resource)?;
        Self::parse_and_validate(resource, &text, registry)
    }

    /// Loads `resource`; `None` means the session cannot start.
    pub fn load<D: TypeDescriptor>(
        &self,
        resource: &str,
        registry: Option<&TypeRegistry<D>>,
    ) -> Option<ConfigDocument> {
        Self::settle(resource, self.try_load(resource, registry))
    }

    /// Loads the layout chosen by this loader's session.
    pub fn load_selected<D: TypeDescriptor>(
        &self,
        registry: Option<&TypeRegistry<D>>,
    ) -> Option<ConfigDocument> {
        self.load(self.session.layout_resource(), registry)
    }

    /// Non-blocking variant of [`try_load`](Self::try_load).
    pub async fn try_load_async<D: TypeDescriptor>(
        &self,
        resource: &str,
        registry: Option<&TypeRegistry<D>>,
    ) -> MatchResult<ConfigDocument> {
        debug!("ConfigLoader: fetching '{}'", self.fetcher.locate(resource));
        let text = self.fetcher.fetch_async(resource).await?;
        Self::parse_and_validate(resource, &text, registry)
    }

    /// Non-blocking variant of [`load`](Self::load).
    pub async fn load_async<D: TypeDescriptor>(
        &self,
        resource: &str,
        registry: Option<&TypeRegistry<D>>,
    ) -> Option<ConfigDocument> {
        Self::settle(resource, self.try_load_async(resource, registry).await)
    }

    /// Non-blocking variant of [`load_selected`](Self::load_selected).
    pub async fn load_selected_async<D: TypeDescriptor>(
        &self,
        registry: Option<&TypeRegistry<D>>,
    ) -> Option<ConfigDocument> {
        self.load_async(self.session.layout_resource(), registry)
            .await
    }

    fn parse_and_validate<D: TypeDescriptor>(
        resource: &str,
        text: &str,
        registry: Option<&TypeRegistry<D>>,
    ) -> MatchResult<ConfigDocument> {
        let document = parse_document(text).map_err(|e| MatchError::Parse {
            resource: resource.to_string(),
            reason: e.to_string(),
        })?;
        check_and_log(document.as_ref(), registry)?;
        document.ok_or_else(|| MatchError::InvalidState("validated document vanished".to_string()))
    }

    fn settle(resource: &str, result: MatchResult<ConfigDocument>) -> Option<ConfigDocument> {
        match result {
            Ok(document) => Some(document),
            Err(MatchError::Validation(_)) => {
                // The validator already logged the specific reason
                error!(
                    "ConfigLoader: Loaded configuration from '{}' is invalid. Check previous errors for details.",
                    resource
                );
                None
            }
            Err(e) => {
                error!("ConfigLoader: {}", e);
                None
            }
        }
    }
}

impl<F: ResourceFetcher + 'static> ConfigLoader<F> {
    /// Runs a load on the tokio runtime and hands back its single result.
    ///
    /// The receiver resolves exactly once with the validated document or
    /// `None`. Must be called from within a tokio runtime.
    pub fn spawn_load<D>(
        self: Arc<Self>,
        resource: impl Into<String>,
        registry: Arc<TypeRegistry<D>>,
    ) -> oneshot::Receiver<Option<ConfigDocument>>
    where
        D: TypeDescriptor + Send + Sync + 'static,
    {
        let resource = resource.into();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let document = self.load_async(&resource, Some(registry.as_ref())).await;
            if tx.send(document).is_err() {
                debug!("ConfigLoader: result for '{}' dropped, receiver gone", resource);
            }
        });
        rx
    }
}
