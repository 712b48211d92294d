use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub server: ServerConfig,
}

/// Where the shared ingress lives and which virtual hostname each model
/// service is registered under.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    /// Spliced into the URLs verbatim; a malformed value is the gateway's to
    /// reject, not ours.
    pub port: String,
    pub translate_hostname: String,
    pub fillmask_hostname: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

/// One backend service as seen from this client: the URL to dial and the
/// `Host` header value the ingress uses to pick that service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTarget {
    pub base_url: String,
    pub virtual_host: String,
}

impl Config {
    /// Resolve the configuration from a key/value source, usually the process
    /// environment. The four gateway values never fail: absent keys fall back
    /// to the defaults and malformed values pass through untouched. Only an
    /// unparseable `CONSOLE_PORT` is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gateway = GatewayConfig {
            host: lookup("INGRESS_HOST").unwrap_or_else(default_ingress_host),
            port: lookup("INGRESS_PORT").unwrap_or_else(default_ingress_port),
            translate_hostname: lookup("TRANSLATE_SERVICE_HOSTNAME")
                .unwrap_or_else(default_translate_hostname),
            fillmask_hostname: lookup("FILLMASK_SERVICE_HOSTNAME")
                .unwrap_or_else(default_fillmask_hostname),
        };

        let port = match lookup("CONSOLE_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| Error::config(format!("invalid CONSOLE_PORT: {}", value)))?,
            None => default_console_port(),
        };

        let server = ServerConfig {
            host: lookup("CONSOLE_HOST").unwrap_or_else(default_console_host),
            port,
            logs: LogsConfig {
                level: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
            },
        };

        Ok(Self { gateway, server })
    }
}

impl GatewayConfig {
    pub fn translate_target(&self) -> RoutingTarget {
        RoutingTarget {
            base_url: format!("http://{}:{}/openai/v1/completions", self.host, self.port),
            virtual_host: self.translate_hostname.clone(),
        }
    }

    pub fn fillmask_target(&self) -> RoutingTarget {
        RoutingTarget {
            base_url: format!("http://{}:{}/v1/models/albert:predict", self.host, self.port),
            virtual_host: self.fillmask_hostname.clone(),
        }
    }
}

fn default_ingress_host() -> String {
    "localhost".to_string()
}

fn default_ingress_port() -> String {
    "80".to_string()
}

fn default_translate_hostname() -> String {
    "huggingface-t5.kserve-test.example.com".to_string()
}

fn default_fillmask_hostname() -> String {
    "huggingface-albert.kserve-test.example.com".to_string()
}

fn default_console_host() -> String {
    "0.0.0.0".to_string()
}

fn default_console_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
