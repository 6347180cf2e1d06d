#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationMethod {
    /// Let the server pick the negotiation scheme.
    Default,
    /// `HTTP Basic` authentication, credentials sent with every request.
    HttpBasic,
    /// `HTTP Digest` challenge-response authentication.
    HttpDigest,
    /// Form-based authentication submitted through an `HTML` form.
    HtmlForm,
    /// Windows `NTLM` challenge-response authentication.
    Ntlm,
    /// `Kerberos`/`SPNEGO` negotiated authentication.
    Negotiate,
    /// Mutual `TLS` with a client certificate.
    ClientCertificate,
    /// Server trust evaluation during the `TLS` handshake.
    ServerTrust,
}

impl AuthenticationMethod {
    pub fn token(self) -> &'static str {
        match self {
            AuthenticationMethod::Default => "default",
            AuthenticationMethod::HttpBasic => "http-basic",
            AuthenticationMethod::HttpDigest => "http-digest",
            AuthenticationMethod::HtmlForm => "html-form",
            AuthenticationMethod::Ntlm => "ntlm",
            AuthenticationMethod::Negotiate => "negotiate",
            AuthenticationMethod::ClientCertificate => "client-certificate",
            AuthenticationMethod::ServerTrust => "server-trust",
        }
    }

    pub fn from_token(token: &str) -> anyhow::Result<Self> {
        match token {
            "default" => Ok(AuthenticationMethod::Default),
            "http-basic" => Ok(AuthenticationMethod::HttpBasic),
            "http-digest" => Ok(AuthenticationMethod::HttpDigest),
            "html-form" => Ok(AuthenticationMethod::HtmlForm),
            "ntlm" => Ok(AuthenticationMethod::Ntlm),
            "negotiate" => Ok(AuthenticationMethod::Negotiate),
            "client-certificate" => Ok(AuthenticationMethod::ClientCertificate),
            "server-trust" => Ok(AuthenticationMethod::ServerTrust),

            _ => Err(anyhow::anyhow!("Invalid authentication method token")),
        }
    }
}

impl std::fmt::Display for AuthenticationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
