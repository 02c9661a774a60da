#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("sk-test").unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model_id, "gpt-3.5-turbo-16k");
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.max_output_size, 16_000);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_blank_key_rejected() {
        assert_eq!(
            GeneratorConfig::new("   ").unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeneratorConfig::new("sk-very-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_temperature_bounds() {
        let config = GeneratorConfig::new("k").unwrap();
        assert!(config.clone().with_temperature(0.0).is_ok());
        assert!(config.clone().with_temperature(2.0).is_ok());
        assert_eq!(
            config.with_temperature(2.5).unwrap_err(),
            ConfigError::InvalidTemperature(2.5)
        );
    }

    #[test]
    fn test_url_joining() {
        let config = GeneratorConfig::new("k")
            .unwrap()
            .with_api_base("http://localhost:8080/v1/");
        assert_eq!(
            config.url("/chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::new("k")
            .unwrap()
            .with_model("gpt-4o-mini")
            .with_max_output_size(512)
            .with_request_timeout(Duration::from_secs(30));
        assert_eq!(config.model_id, "gpt-4o-mini");
        assert_eq!(config.max_output_size, 512);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    // Only test in the crate that touches these variables
    #[test]
    fn test_from_env() {
        std::env::set_var("OPENAI_API_KEY", " sk-env ");
        std::env::set_var("OPENAI_BASE_URL", "http://proxy.local/v1/");
        std::env::set_var("POSTFORGE_MODEL", "gpt-4o-mini");
        std::env::set_var("POSTFORGE_TEMPERATURE", "0.5");
        std::env::set_var("POSTFORGE_MAX_TOKENS", "not-a-number");

        assert_eq!(
            GeneratorConfig::from_env().unwrap_err(),
            ConfigError::InvalidEnv {
                name: "POSTFORGE_MAX_TOKENS",
                value: "not-a-number".to_string()
            }
        );

        std::env::set_var("POSTFORGE_MAX_TOKENS", "2048");
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.api_key(), "sk-env");
        assert_eq!(config.api_base, "http://proxy.local/v1");
        assert_eq!(config.model_id, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.max_output_size, 2048);

        std::env::remove_var("OPENAI_API_KEY");
        assert_eq!(
            GeneratorConfig::from_env().unwrap_err(),
            ConfigError::MissingApiKey
        );

        for name in [
            "OPENAI_BASE_URL",
            "POSTFORGE_MODEL",
            "POSTFORGE_TEMPERATURE",
            "POSTFORGE_MAX_TOKENS",
        ] {
            std::env::remove_var(name);
        }
    }
}
