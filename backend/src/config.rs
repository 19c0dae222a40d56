use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Runtime configuration, from command-line flags or the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "goal-dashboard", version, about = "Personal goal dashboard server", long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "DASHBOARD_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = 5000)]
    pub port: u16,

    /// JSON file holding the weekly and daily goals
    #[arg(long, env = "DASHBOARD_GOALS_FILE", default_value = "user_goals.json")]
    pub goals_file: PathBuf,

    /// JSON array of quotes, read once at startup
    #[arg(long, env = "DASHBOARD_QUOTES_FILE", default_value = "quotes.json")]
    pub quotes_file: PathBuf,

    /// Directory with the dashboard front-end, served for non-API paths
    #[arg(long, env = "DASHBOARD_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Origin allowed to call the API cross-site
    #[arg(long, env = "DASHBOARD_ALLOWED_ORIGIN")]
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "goal-dashboard",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--goals-file",
            "/var/lib/dashboard/goals.json",
            "--quotes-file",
            "/etc/dashboard/quotes.json",
            "--static-dir",
            "static",
            "--allowed-origin",
            "http://localhost:8080",
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.goals_file, PathBuf::from("/var/lib/dashboard/goals.json"));
        assert_eq!(config.quotes_file, PathBuf::from("/etc/dashboard/quotes.json"));
        assert_eq!(config.static_dir, Some(PathBuf::from("static")));
        assert_eq!(config.allowed_origin.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::try_parse_from(["goal-dashboard", "--port", "99999"]).is_err());
    }
}
