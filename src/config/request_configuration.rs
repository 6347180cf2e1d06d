use std::{collections::HashMap, sync::Arc};

use crate::auth::{authentication_method::AuthenticationMethod, protection_space::ProtectionSpace};
use crate::config::request_configuration_holder::RequestConfigurationHolder;

/// A configuration handed out by a holder, shared between any number of readers.
pub type SharedConfiguration = Arc<dyn RequestConfiguration>;

/// The contract an application configuration implements to describe how
/// requests are built and where they are sent.
pub trait RequestConfiguration: Send + Sync {
    /// Headers applied to every request.
    ///
    /// Headers set on a specific request are appended to these.
    fn default_headers(&self) -> &HashMap<String, String>;

    /// The scheme requests are sent over, for example "https".
    fn request_protocol(&self) -> &str;

    /// The host name requests are sent to, without scheme or path.
    fn base_url(&self) -> &str;

    /// The port requests are sent to.
    fn port(&self) -> u16;

    /// The realm presented when a server challenges for credentials.
    fn authentication_realm(&self) -> &str;

    /// The method used to answer a server challenge.
    fn authentication_method(&self) -> AuthenticationMethod;

    /// Builds the protection space guarding this configuration's host and realm.
    ///
    /// The space is built from the current field values on every call.
    fn protection_space(&self) -> ProtectionSpace {
        ProtectionSpace::new(self.base_url(), self.port(), self.request_protocol(), self.authentication_realm(), self.authentication_method())
    }

    /// Installs this configuration in the process-wide holder, making it the
    /// configuration used for subsequent requests.
    fn assign(self)
    where
        Self: Sized + 'static,
    {
        self.assign_to(RequestConfigurationHolder::shared());
    }

    /// Installs this configuration in the given holder.
    fn assign_to(self, holder: &RequestConfigurationHolder)
    where
        Self: Sized + 'static,
    {
        holder.set(Arc::new(self));
    }
}
