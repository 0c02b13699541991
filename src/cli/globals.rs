use secrecy::SecretString;

/// Runtime configuration shared with the API surface via request extensions.
#[derive(Clone)]
pub struct GlobalArgs {
    pub jwt_secret: SecretString,
    pub allowed_origin: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(jwt_secret: SecretString, allowed_origin: Option<String>) -> Self {
        Self {
            jwt_secret,
            allowed_origin,
        }
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("jwt_secret", &"***")
            .field("allowed_origin", &self.allowed_origin)
            .finish()
    }
}
