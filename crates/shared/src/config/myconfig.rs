use anyhow::{Context, Result, anyhow};

const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub access_token_ttl_minutes: i64,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(raw) => parse_bcrypt_cost(&raw)?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        let access_token_ttl_minutes = match std::env::var("ACCESS_TOKEN_TTL_MINUTES") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or_else(|| {
                    anyhow!("ACCESS_TOKEN_TTL_MINUTES must be a positive integer, got '{raw}'")
                })?,
            Err(_) => DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
        };

        if jwt_secret.trim().is_empty() {
            return Err(anyhow!("JWT_SECRET must not be empty"));
        }

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations: parse_bool_flag("RUN_MIGRATIONS", &run_migrations_str)?,
            port: port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            bcrypt_cost,
            access_token_ttl_minutes,
        })
    }
}

fn parse_bool_flag(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_bcrypt_cost(raw: &str) -> Result<u32> {
    let cost = raw
        .parse::<u32>()
        .context("BCRYPT_COST must be a valid u32 integer")?;

    // bcrypt rejects anything outside 4..=31
    if !(4..=31).contains(&cost) {
        return Err(anyhow!("BCRYPT_COST must be between 4 and 31, got {cost}"));
    }

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_flags_are_strict() {
        assert!(parse_bool_flag("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_bool_flag("RUN_MIGRATIONS", "false").unwrap());
        assert!(parse_bool_flag("RUN_MIGRATIONS", "yes").is_err());
    }

    #[test]
    fn bcrypt_cost_bounds() {
        assert_eq!(parse_bcrypt_cost("10").unwrap(), 10);
        assert!(parse_bcrypt_cost("3").is_err());
        assert!(parse_bcrypt_cost("32").is_err());
        assert!(parse_bcrypt_cost("abc").is_err());
    }
}
