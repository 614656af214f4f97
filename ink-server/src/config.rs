//! Command line / environment configuration.

use clap::Args;
use ink_stats::strava::StravaCredentials;
use std::{net::SocketAddr, path::PathBuf};

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "INK_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Strava tokens JSON (read, and rewritten after a token refresh)
    #[arg(long, env = "STRAVA_TOKENS", default_value = "strava_tokens.json")]
    pub tokens: PathBuf,

    /// Directory served under /static
    #[arg(long, env = "INK_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Where the rendered card PNG is written
    #[arg(long, env = "INK_IMAGE", default_value = "static/img/stats.png")]
    pub image: PathBuf,

    /// Directory holding Roboto-Bold.ttf, Roboto-Light.ttf and Roboto-Regular.ttf
    #[arg(long, env = "INK_FONT_DIR", default_value = "static/fonts")]
    pub font_dir: PathBuf,

    /// Strava application client id
    #[arg(long, env = "STRAVA_CLIENT_ID")]
    pub client_id: String,

    /// Strava application client secret
    #[arg(long, env = "STRAVA_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Athlete whose YTD totals are shown
    #[arg(long, env = "STRAVA_ATHLETE_ID")]
    pub athlete_id: String,

    /// e-ink panel device node; cards are also drawn there when set
    #[cfg(feature = "inky")]
    #[arg(long, env = "INK_EINK_DEVICE")]
    pub eink_device: Option<PathBuf>,
}

impl ServerConfig {
    pub fn credentials(&self) -> StravaCredentials {
        StravaCredentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            athlete_id: self.athlete_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ServerConfig,
    }

    #[test]
    fn test_defaults_and_credentials() {
        let cli = TestCli::try_parse_from([
            "ink-server",
            "--client-id",
            "123",
            "--client-secret",
            "shh",
            "--athlete-id",
            "42",
        ])
        .unwrap();
        let config = cli.config;
        assert_eq!(config.bind, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.image, PathBuf::from("static/img/stats.png"));
        let credentials = config.credentials();
        assert_eq!(credentials.client_id, "123");
        assert_eq!(credentials.athlete_id, "42");
    }

    #[test]
    fn test_bind_override() {
        let cli = TestCli::try_parse_from([
            "ink-server",
            "--bind",
            "0.0.0.0:8080",
            "--client-id",
            "1",
            "--client-secret",
            "2",
            "--athlete-id",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.config.bind.port(), 8080);
    }

    #[cfg(feature = "inky")]
    #[test]
    fn test_eink_device() {
        let cli = TestCli::try_parse_from([
            "ink-server",
            "--client-id",
            "1",
            "--client-secret",
            "2",
            "--athlete-id",
            "3",
            "--eink-device",
            "/dev/inky",
        ])
        .unwrap();
        assert_eq!(cli.config.eink_device, Some(PathBuf::from("/dev/inky")));
    }
}
