use std::sync::{Arc, OnceLock, RwLock};

use crate::config::{default_request_configuration::DefaultRequestConfiguration, request_configuration::SharedConfiguration};

static SHARED: OnceLock<RequestConfigurationHolder> = OnceLock::new();

/// Holds the configuration that requests read from.
///
/// The slot is guarded so a reader always observes one configuration as a
/// whole, either the previous one or the new one, never a mix of the two.
pub struct RequestConfigurationHolder {
    configuration: RwLock<SharedConfiguration>,
}

impl RequestConfigurationHolder {
    /// Creates a holder seeded with `DefaultRequestConfiguration`.
    pub fn new() -> Self {
        RequestConfigurationHolder {
            configuration: RwLock::new(Arc::new(DefaultRequestConfiguration::new())),
        }
    }

    /// Returns the process-wide holder, created on first access.
    pub fn shared() -> &'static RequestConfigurationHolder {
        SHARED.get_or_init(RequestConfigurationHolder::new)
    }

    /// Returns the configuration currently held.
    pub fn get(&self) -> SharedConfiguration {
        self.configuration.read().unwrap_or_else(|err| err.into_inner()).clone()
    }

    /// Replaces the held configuration.
    pub fn set(&self, configuration: SharedConfiguration) {
        tracing::debug!("assigning configuration for {}://{}:{}", configuration.request_protocol(), configuration.base_url(), configuration.port());
        *self.configuration.write().unwrap_or_else(|err| err.into_inner()) = configuration;
    }
}

impl Default for RequestConfigurationHolder {
    fn default() -> Self {
        RequestConfigurationHolder::new()
    }
}
