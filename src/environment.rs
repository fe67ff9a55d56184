use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the daemon endpoints the viewer can connect to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// A daemon running on this machine, on its default port.
    #[default]
    Local,
    /// A daemon reachable at an explicit base URL.
    Custom { daemon_url: String },
}

impl Environment {
    /// Returns the daemon base URL associated with the environment.
    pub fn daemon_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:9000".to_string(),
            Environment::Custom { daemon_url } => daemon_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "local" => Ok(Environment::Local),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Ok(Environment::Custom {
                    daemon_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.daemon_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_is_default_daemon_port() {
        assert_eq!(Environment::Local.daemon_url(), "http://localhost:9000");
    }

    #[test]
    fn test_parse_custom_url_trims_trailing_slash() {
        let env = "http://media-box:9000/".parse::<Environment>().unwrap();
        assert_eq!(env.daemon_url(), "http://media-box:9000");
    }

    #[test]
    fn test_parse_rejects_bare_hostname() {
        assert!("media-box".parse::<Environment>().is_err());
    }
}
