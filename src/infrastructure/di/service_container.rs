//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{InputService, TreeService};
use crate::config::Settings;
use crate::infrastructure::traits::{NotationReader, RealNotationReader};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Notation input abstraction
    pub reader: Arc<dyn NotationReader>,

    /// Input loading (argument, file, stdin)
    pub input: InputService,

    /// Parse, build and render pipeline
    pub tree: TreeService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealNotationReader))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, reader: Arc<dyn NotationReader>) -> Self {
        let input = InputService::new(Arc::clone(&reader), settings.comment_prefix.clone());
        let tree = TreeService::new(settings.clone());
        let settings = Arc::new(settings);

        Self {
            settings,
            reader,
            input,
            tree,
        }
    }
}
