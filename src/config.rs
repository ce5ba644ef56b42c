use std::time::Duration;

use url::Url;

use crate::error::{config::ConfigError, AppError};

const CARDSIGHT_BASE_URL: &str = "https://api.cardsight.ai";
const CARDSIGHT_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub discord_bot_token: String,
    pub discord_application_id: u64,
    /// Guild to register commands in instead of globally, for development.
    pub discord_guild_id: Option<u64>,

    pub cardsight_api_key: String,
    pub cardsight_base_url: Url,
    pub cardsight_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let cardsight_base_url = match get("CARDSIGHT_BASE_URL") {
            Some(value) => parse_url("CARDSIGHT_BASE_URL", &value)?,
            None => parse_url("CARDSIGHT_BASE_URL", CARDSIGHT_BASE_URL)?,
        };

        let cardsight_timeout_secs = match get("CARDSIGHT_TIMEOUT_SECS") {
            Some(value) => {
                parse_non_zero("CARDSIGHT_TIMEOUT_SECS", &value, "must be at least 1 second")?
            }
            None => CARDSIGHT_TIMEOUT_SECS,
        };

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            discord_application_id: parse_id(
                "DISCORD_APPLICATION_ID",
                &require("DISCORD_APPLICATION_ID")?,
            )?,
            discord_guild_id: get("DISCORD_GUILD_ID")
                .map(|value| parse_id("DISCORD_GUILD_ID", &value))
                .transpose()?,
            cardsight_api_key: require("CARDSIGHT_API_KEY")?,
            cardsight_base_url,
            cardsight_timeout: Duration::from_secs(cardsight_timeout_secs),
        })
    }
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_non_zero(name: &str, value: &str, reason: &str) -> Result<u64, ConfigError> {
    match parse_u64(name, value)? {
        0 => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        parsed => Ok(parsed),
    }
}

/// Discord snowflakes are never zero; serenity's id types panic on it.
fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    parse_non_zero(name, value, "must be a non-zero Discord id")
}

/// API endpoints are joined onto the base URL, so it needs a path hierarchy.
fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must be an http(s) base URL".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("DISCORD_BOT_TOKEN", "token"),
        ("DISCORD_APPLICATION_ID", "123456789"),
        ("CARDSIGHT_API_KEY", "key"),
    ];

    /// Tests loading configuration with only the required variables.
    ///
    /// Expected: Ok with defaults for base URL, timeout and guild
    #[test]
    fn loads_required_with_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.discord_application_id, 123456789);
        assert_eq!(config.cardsight_api_key, "key");
        assert_eq!(config.cardsight_base_url.as_str(), "https://api.cardsight.ai/");
        assert_eq!(config.cardsight_timeout, Duration::from_secs(30));
        assert!(config.discord_guild_id.is_none());
    }

    /// Tests that optional variables override the defaults.
    ///
    /// Expected: Ok with overridden values
    #[test]
    fn loads_optional_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("CARDSIGHT_BASE_URL", "http://localhost:8080"));
        vars.push(("CARDSIGHT_TIMEOUT_SECS", "5"));
        vars.push(("DISCORD_GUILD_ID", "42"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.cardsight_base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.cardsight_timeout, Duration::from_secs(5));
        assert_eq!(config.discord_guild_id, Some(42));
    }

    /// Tests that a missing API key is reported by name.
    ///
    /// Expected: Err(MissingEnvVar("CARDSIGHT_API_KEY"))
    #[test]
    fn fails_on_missing_api_key() {
        let vars = &REQUIRED[..2];

        let result = Config::from_lookup(lookup(vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "CARDSIGHT_API_KEY"
        ));
    }

    /// Tests that an empty token counts as missing.
    ///
    /// Expected: Err(MissingEnvVar("DISCORD_BOT_TOKEN"))
    #[test]
    fn fails_on_empty_token() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = ("DISCORD_BOT_TOKEN", "  ");

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    /// Tests that a non-numeric application id is rejected.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn fails_on_invalid_application_id() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = ("DISCORD_APPLICATION_ID", "not-a-number");

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "DISCORD_APPLICATION_ID"
        ));
    }

    /// Tests that a zero guild id is rejected.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn fails_on_zero_guild_id() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("DISCORD_GUILD_ID", "0"));

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "DISCORD_GUILD_ID"
        ));
    }

    /// Tests that a zero timeout is rejected.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn fails_on_zero_timeout() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("CARDSIGHT_TIMEOUT_SECS", "0"));

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "CARDSIGHT_TIMEOUT_SECS"
        ));
    }

    /// Tests that a base URL endpoints cannot be joined onto is rejected.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn fails_on_base_url_without_path_hierarchy() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("CARDSIGHT_BASE_URL", "mailto:ops@cardsight.ai"));

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "CARDSIGHT_BASE_URL"
        ));
    }
}
