pub mod authentication_method;
pub mod protection_space;

#[cfg(test)]
mod test {
    use crate::auth::{authentication_method::AuthenticationMethod, protection_space::ProtectionSpace};

    #[test]
    fn authentication_method_tokens() {
        let methods = [
            AuthenticationMethod::Default,
            AuthenticationMethod::HttpBasic,
            AuthenticationMethod::HttpDigest,
            AuthenticationMethod::HtmlForm,
            AuthenticationMethod::Ntlm,
            AuthenticationMethod::Negotiate,
            AuthenticationMethod::ClientCertificate,
            AuthenticationMethod::ServerTrust,
        ];
        for method in methods {
            assert_eq!(AuthenticationMethod::from_token(method.token()).unwrap(), method);
        }
        assert_eq!(AuthenticationMethod::HttpBasic.to_string(), "http-basic");
        assert!(AuthenticationMethod::from_token("bearer").is_err());
    }

    #[test]
    fn protection_space_equality() {
        let space = ProtectionSpace::new("api.example.com", 443, "https", "Restricted", AuthenticationMethod::HttpBasic);
        let same = ProtectionSpace::new("api.example.com", 443, "https", "Restricted", AuthenticationMethod::HttpBasic);
        let other_realm = ProtectionSpace::new("api.example.com", 443, "https", "Internal", AuthenticationMethod::HttpBasic);

        assert_eq!(space, same);
        assert_ne!(space, other_realm);
        assert_eq!(space.host(), "api.example.com");
        assert_eq!(space.port(), 443);
        assert_eq!(space.protocol(), "https");
        assert_eq!(space.realm(), "Restricted");
        assert_eq!(space.authentication_method(), AuthenticationMethod::HttpBasic);
    }

    #[test]
    fn protection_space_credential_security() {
        let cleartext_methods = [
            AuthenticationMethod::Default,
            AuthenticationMethod::HttpBasic,
            AuthenticationMethod::HttpDigest,
            AuthenticationMethod::HtmlForm,
        ];
        let protected_methods = [
            AuthenticationMethod::Ntlm,
            AuthenticationMethod::Negotiate,
            AuthenticationMethod::ClientCertificate,
            AuthenticationMethod::ServerTrust,
        ];

        for method in cleartext_methods {
            let http = ProtectionSpace::new("api.example.com", 80, "http", "Restricted", method);
            let https = ProtectionSpace::new("api.example.com", 443, "https", "Restricted", method);
            assert!(!http.receives_credential_securely());
            assert!(https.receives_credential_securely());
        }
        for method in protected_methods {
            let http = ProtectionSpace::new("api.example.com", 80, "http", "Restricted", method);
            assert!(http.receives_credential_securely());
        }
    }
}
