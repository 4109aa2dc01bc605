use std::str::FromStr;

#[derive(Debug, ::thiserror::Error)]
pub enum SettingsError {
    #[error("`{key}` has invalid value `{value}`")]
    InvalidValue { key: &'static str, value: String },
}

/// Server settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 3000,
            static_dir: String::from("./static/"),
            workers: 2,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, SettingsError> {
        let vars = vars.into_iter().collect::<Vec<_>>();
        let find = |key: &str| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        let defaults = Self::default();

        Ok(Self {
            host: find("HOST").unwrap_or(defaults.host),
            port: parse("PORT", find("PORT"))?.unwrap_or(defaults.port),
            static_dir: find("STATIC_DIR").unwrap_or(defaults.static_dir),
            workers: parse("WORKERS", find("WORKERS"))?
                .filter(|w| *w > 0)
                .unwrap_or(defaults.workers),
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: Option<String>) -> Result<Option<T>, SettingsError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| SettingsError::InvalidValue { key, value: v })
        })
        .transpose()
}
