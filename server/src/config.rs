use ::config::{Environment, File, builder::DefaultState};
use jiff::SignedDuration;
use secrecy::SecretString;
use serde::Deserialize;
use types::Result;

type Builder = ::config::ConfigBuilder<DefaultState>;

/// Optional `nexnode.toml` next to the working directory.
const CONFIG_FILE: &str = "nexnode";
/// `NEXNODE_SESSION_SECRET` and friends.
const ENV_PREFIX: &str = "NEXNODE";

#[derive(Clone, Deserialize)]
pub struct Config {
    pub site_name: String,
    #[serde(deserialize_with = "secret_string::deserialize")]
    pub session_secret: SecretString,
    pub session_ttl_hours: u32,
    pub reset_link_ttl_minutes: u32,
    pub demo_email: String,
    #[serde(deserialize_with = "secret_string::deserialize")]
    pub demo_password: SecretString,
    pub demo_first_name: String,
    pub demo_last_name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let sources = defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(sources.try_deserialize()?)
    }

    pub fn session_ttl(&self) -> SignedDuration {
        SignedDuration::from_hours(self.session_ttl_hours.into())
    }

    pub fn reset_link_ttl(&self) -> SignedDuration {
        SignedDuration::from_mins(self.reset_link_ttl_minutes.into())
    }
}

fn defaults() -> Result<Builder> {
    Ok(::config::Config::builder()
        .set_default("site_name", "Nexnode")?
        .set_default("session_ttl_hours", 24_i64)?
        .set_default("reset_link_ttl_minutes", 60_i64)?
        .set_default("demo_email", "sofia@devias.io")?
        .set_default("demo_password", "Secret1")?
        .set_default("demo_first_name", "Sofia")?
        .set_default("demo_last_name", "Rivers")?)
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}
