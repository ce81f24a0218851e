use crate::{ConfigError, ConfigErrorResult, ConfigSection, MIN_JWT_SECRET_LENGTH};

use std::path::Path;

use serde::Deserialize;

/// How incoming ID tokens are verified.
///
/// Exactly one key source is required: an HS256 shared secret or the path
/// to an RS256 public key (PEM, relative to the config directory).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub jwt_public_key_path: Option<String>,
    /// Required `iss` claim, if set
    pub issuer: Option<String>,
    /// Required `aud` claim, if set
    pub audience: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        let key_source = match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err("one of jwt_secret or jwt_public_key_path is required".to_string()),
            (Some(_), Some(_)) => {
                Err("jwt_secret and jwt_public_key_path are mutually exclusive".to_string())
            }
            (Some(secret), None) if secret.len() < MIN_JWT_SECRET_LENGTH => Err(format!(
                "jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
            )),
            (Some(_), None) => Ok(()),
            (None, Some(key_path))
                if Path::new(key_path).is_absolute() || key_path.contains("..") =>
            {
                Err("jwt_public_key_path must be relative and cannot contain '..'".to_string())
            }
            (None, Some(key_path)) if !config_dir.join(key_path).is_file() => Err(format!(
                "jwt_public_key_path not found: {}",
                config_dir.join(key_path).display()
            )),
            (None, Some(_)) => Ok(()),
        };
        key_source.map_err(|message| ConfigError::invalid(ConfigSection::Auth, message))?;

        if matches!(&self.issuer, Some(issuer) if issuer.trim().is_empty()) {
            return Err(ConfigError::invalid(
                ConfigSection::Auth,
                "issuer cannot be blank",
            ));
        }
        if matches!(&self.audience, Some(audience) if audience.trim().is_empty()) {
            return Err(ConfigError::invalid(
                ConfigSection::Auth,
                "audience cannot be blank",
            ));
        }

        Ok(())
    }

    /// Algorithm name for log output
    pub fn algorithm(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
