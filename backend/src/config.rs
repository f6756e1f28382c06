use clap::Parser;

/// Command line and environment settings for the dashboard host.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Serves the World Worm Map dashboard")]
pub struct ServerConfig {
    /// Address to bind to.
    #[arg(long, env = "WWM_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "WWM_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Do not open the dashboard in the default browser on start.
    #[arg(long, env = "WWM_NO_BROWSER")]
    pub no_browser: bool,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config =
            ServerConfig::try_parse_from(["backend", "--host", "0.0.0.0", "--port", "9000", "--no-browser"])
                .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(config.no_browser);
        assert_eq!(config.url(), "http://0.0.0.0:9000");
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(ServerConfig::try_parse_from(["backend", "--port", "not-a-port"]).is_err());
    }
}
