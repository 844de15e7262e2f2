use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const CRATES: &[&str] = &["nomad_cli", "nomad_queries", "nomad_db", "nomad_data"];

/// Build the log filter. `RUST_LOG` takes precedence
/// over the configured level.
pub fn filter(level: &str) -> Result<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::try_from_default_env()?);
    }
    let directives: Vec<String> = CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect();
    Ok(EnvFilter::try_new(directives.join(","))?)
}

/// Install the log subscriber, writing to stderr
pub fn init(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("could not initialize logging: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_levels() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = filter("debug").unwrap().to_string();
        assert!(filter.contains("nomad_queries=debug"));
        assert!(filter.contains("nomad_db=debug"));
    }
}
