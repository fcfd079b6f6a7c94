//! Backend identifiers used in configuration, mapped to factory constructors.
//!
//! Configuration names a backend by a short string (`type = "console"`); the
//! registry turns that into a factory, passing along the declaration's init data.

use crate::Error;
use crate::factory::{BackendInit, LoggerFactory, NamedLoggerFactory, NullLoggerFactory, SingleLoggerFactory};
use crate::internal;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Builds a factory from optional init data.
pub type BackendConstructor =
    dyn Fn(Option<&str>) -> Result<Arc<dyn LoggerFactory>, Error> + Send + Sync;

/// Case-insensitive identifier → constructor map.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    constructors: BTreeMap<String, Arc<BackendConstructor>>,
}

impl BackendRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `null`, `test`, `debug`, `console` and `single`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("null", |data| {
            reject_data("null", data)?;
            Ok(NullLoggerFactory::shared())
        });
        registry.register("test", |data| {
            reject_data("test", data)?;
            Ok(Arc::new(NamedLoggerFactory::test()))
        });
        registry.register("debug", |data| {
            let format = BackendInit::parse(data)?.formatter()?;
            Ok(Arc::new(NamedLoggerFactory::debug_with(format)))
        });
        registry.register("console", |data| {
            let format = BackendInit::parse(data)?.formatter()?;
            Ok(Arc::new(NamedLoggerFactory::console_with(format)))
        });
        registry.register("single", |data| {
            let factory = SingleLoggerFactory::new();
            if let Some(data) = data {
                factory.init(data)?;
            }
            Ok(Arc::new(factory))
        });
        registry
    }

    /// Adds or replaces the constructor for `id`.
    pub fn register(
        &mut self,
        id: &str,
        constructor: impl Fn(Option<&str>) -> Result<Arc<dyn LoggerFactory>, Error>
        + Send
        + Sync
        + 'static,
    ) {
        self.constructors
            .insert(id.trim().to_lowercase(), Arc::new(constructor));
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(&id.trim().to_lowercase())
    }

    /// Registered identifiers in sorted order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }

    /// # Errors
    /// `Error::UnknownBackend` for an unregistered id, otherwise whatever the
    /// constructor reports (usually `Error::Init`).
    pub fn create(&self, id: &str, data: Option<&str>) -> Result<Arc<dyn LoggerFactory>, Error> {
        let constructor = self
            .constructors
            .get(&id.trim().to_lowercase())
            .ok_or_else(|| Error::UnknownBackend(id.to_string()))?;
        constructor(data)
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

fn reject_data(id: &str, data: Option<&str>) -> Result<(), Error> {
    match data.map(str::trim) {
        None | Some("") => Ok(()),
        Some(_) => Err(Error::Init(format!("backend '{id}' takes no init data"))),
    }
}

static GLOBAL: RwLock<Option<BackendRegistry>> = RwLock::new(None);

/// Makes a backend available to the process-wide service's configuration loading.
pub fn register_backend(
    id: &str,
    constructor: impl Fn(Option<&str>) -> Result<Arc<dyn LoggerFactory>, Error>
    + Send
    + Sync
    + 'static,
) {
    let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    global
        .get_or_insert_with(BackendRegistry::with_builtins)
        .register(id, constructor);
    internal::debug("BACKEND", &format!("Registered backend '{id}'"));
}

/// The built-ins plus everything added through [`register_backend`].
#[must_use]
pub fn global_snapshot() -> BackendRegistry {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(BackendRegistry::with_builtins)
}
