//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use cosmos_config::PortalConfig;
use pretty_assertions::assert_eq;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.cosmos.example/"
timeout_secs = 30
"#,
        )?;

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url(), "https://api.cosmos.example");
        assert_eq!(config.api.timeout_secs, Some(30));
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:9000"

[identity]
email = "sam@example.com"
store_path = "/tmp/cosmos/identity"

[session]
user_id = 42
cohort_id = 7

[profile]
display_name = "Sam Rivera"
"#,
        )?;

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.identity.email_override(), Some("sam@example.com"));
        assert_eq!(config.session.user_id, 42);
        assert_eq!(config.session.cohort_id, 7);
        assert_eq!(config.profile.initials(), "SR");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".cosmos")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".cosmos/config.toml",
            r#"
[session]
cohort_id = 3
"#,
        )?;

        let config = PortalConfig::load().expect("config loads");
        assert_eq!(config.session.cohort_id, 3);
        // Untouched sections keep their defaults.
        assert_eq!(config.session.user_id, 1);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("COSMOS_API__BASE_URL", "http://from-env:8000");

        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://from-toml:8000"
timeout_secs = 5
"#,
        )?;

        let config: PortalConfig = Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("COSMOS_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.api.base_url(), "http://from-env:8000");
        // TOML value not overridden by env should remain
        assert_eq!(config.api.timeout_secs, Some(5));
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("COSMOS_SESSION__USER_ID", "9");
        jail.set_env("COSMOS_IDENTITY__EMAIL", "env@example.com");

        let config = PortalConfig::load().expect("config loads");
        assert_eq!(config.session.user_id, 9);
        assert_eq!(config.identity.email_override(), Some("env@example.com"));
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("COSMOS_API__BASE_URL", "ftp://files.example");

        let err = PortalConfig::load().expect_err("ftp scheme should be rejected");
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
