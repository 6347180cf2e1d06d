use std::collections::HashMap;

use crate::auth::authentication_method::AuthenticationMethod;
use crate::config::request_configuration::RequestConfiguration;

/// A ready-to-use configuration for JSON APIs served over https.
///
/// Use as is, adjust single fields with the chained setters, or replace the
/// field values outright. The base url is a placeholder and should always be
/// set before the configuration is assigned.
#[derive(Debug, Clone)]
pub struct DefaultRequestConfiguration {
    pub default_headers: HashMap<String, String>,
    pub request_protocol: String,
    pub base_url: String,
    pub port: u16,
    pub authentication_realm: String,
    pub authentication_method: AuthenticationMethod,
}

impl DefaultRequestConfiguration {
    pub fn new() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert(String::from("Accept"), String::from("application/json"));
        default_headers.insert(String::from("Content-Type"), String::from("application/json"));

        DefaultRequestConfiguration {
            default_headers,
            request_protocol: String::from("https"),
            base_url: String::from("test.url.com"),
            port: 443,
            authentication_realm: String::from("Restricted"),
            authentication_method: AuthenticationMethod::Default,
        }
    }

    /// Adds a header to the default headers, replacing any previous value for the key.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Replaces the default headers entirely.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn with_request_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.request_protocol = protocol.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_authentication_realm(mut self, realm: impl Into<String>) -> Self {
        self.authentication_realm = realm.into();
        self
    }

    pub fn with_authentication_method(mut self, method: AuthenticationMethod) -> Self {
        self.authentication_method = method;
        self
    }
}

impl Default for DefaultRequestConfiguration {
    fn default() -> Self {
        DefaultRequestConfiguration::new()
    }
}

impl RequestConfiguration for DefaultRequestConfiguration {
    fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    fn request_protocol(&self) -> &str {
        &self.request_protocol
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn authentication_realm(&self) -> &str {
        &self.authentication_realm
    }

    fn authentication_method(&self) -> AuthenticationMethod {
        self.authentication_method
    }
}
