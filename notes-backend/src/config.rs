use std::env;
use std::str::FromStr;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const DATABASE_URL: &str = "./.db/notes.db";
    pub const DATABASE_POOL_SIZE: u32 = 8;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub database_pool_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_or_default(env_vars::PORT, defaults::PORT),
            bind_address: env::var(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|_| defaults::BIND_ADDRESS.to_string()),
            database_url: env::var(env_vars::DATABASE_URL)
                .unwrap_or_else(|_| defaults::DATABASE_URL.to_string()),
            database_pool_size: parse_or_default(
                env_vars::DATABASE_POOL_SIZE,
                defaults::DATABASE_POOL_SIZE,
            )
            .max(1),
        }
    }
}

/// Read a numeric env var, falling back to the default when unset or unparseable
fn parse_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_value<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match raw.trim().parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            log::warn!(
                "Invalid value {:?} for {}, using default {}",
                raw,
                name,
                default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_numbers() {
        assert_eq!(parse_value("PORT", "9090", defaults::PORT), 9090);
        assert_eq!(parse_value("PORT", " 3000 ", defaults::PORT), 3000);
    }

    #[test]
    fn test_parse_value_falls_back_on_garbage() {
        assert_eq!(parse_value("PORT", "eighty", defaults::PORT), defaults::PORT);
        assert_eq!(parse_value("PORT", "70000", defaults::PORT), defaults::PORT);
        assert_eq!(
            parse_value("DATABASE_POOL_SIZE", "-1", defaults::DATABASE_POOL_SIZE),
            defaults::DATABASE_POOL_SIZE
        );
    }
}
