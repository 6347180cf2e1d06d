use crate::auth::authentication_method::AuthenticationMethod;

/// Identifies a server realm that may challenge requests for credentials.
///
/// Two spaces compare equal when every component matches, so a space can be
/// used as a lookup key for stored credentials.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtectionSpace {
    host: String,
    port: u16,
    protocol: String,
    realm: String,
    authentication_method: AuthenticationMethod,
}

impl ProtectionSpace {
    pub fn new(host: impl Into<String>, port: u16, protocol: impl Into<String>, realm: impl Into<String>, authentication_method: AuthenticationMethod) -> Self {
        ProtectionSpace {
            host: host.into(),
            port,
            protocol: protocol.into(),
            realm: realm.into(),
            authentication_method,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    pub fn authentication_method(&self) -> AuthenticationMethod {
        self.authentication_method
    }

    /// Returns true when credentials sent to this space cannot be read in transit,
    /// either because the transport is encrypted or because the method never sends
    /// them in clear text.
    pub fn receives_credential_securely(&self) -> bool {
        if self.protocol == "https" {
            return true;
        }
        matches!(
            self.authentication_method,
            AuthenticationMethod::ClientCertificate | AuthenticationMethod::Negotiate | AuthenticationMethod::Ntlm | AuthenticationMethod::ServerTrust
        )
    }
}
