use log::info;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: var_or("HOST", "127.0.0.1"),
            port: parse_or("PORT", "4000"),
            data_dir: PathBuf::from(var_or("DATA_DIR", "./mock_data")),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var_or(key, default)
        .parse()
        .map_err(|e| info!("Invalid {key} value: {e}"))
        .expect("Environment misconfigured!")
}
