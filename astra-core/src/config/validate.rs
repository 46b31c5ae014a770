//! Configuration validation rules.

use super::schema::Config;

/// Validate configuration and return aggregated validation errors.
pub fn validate_config(config: &Config) -> crate::Result<()> {
    let mut errors = Vec::new();

    if config.provider.api_base.trim().is_empty() {
        errors.push("provider.api_base must not be empty".to_string());
    }
    if config.provider.model.trim().is_empty() {
        errors.push("provider.model must not be empty".to_string());
    }
    if config.chat.persona.trim().is_empty() {
        errors.push("chat.persona must not be empty".to_string());
    }
    if config.chat.max_history == 0 {
        errors.push("chat.max_history must be > 0".to_string());
    }
    if config.server.port == 0 {
        errors.push("server.port must be > 0".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Config(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_zero_history_cap() {
        let mut config = Config::default();
        config.chat.max_history = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("max_history"));
    }

    #[test]
    fn test_errors_are_aggregated() {
        let mut config = Config::default();
        config.provider.api_base = "  ".to_string();
        config.chat.max_history = 0;
        let err = validate_config(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("api_base"));
        assert!(msg.contains("max_history"));
    }
}
