use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl ServerSettings {
    /// Resolves the listen port from a raw `PORT` value. Absent or unparsable
    /// values fall back to [`DEFAULT_PORT`].
    pub fn from_port_var(port: Option<&str>) -> Self {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!(value = raw, default = DEFAULT_PORT, "Ignoring invalid PORT");
                DEFAULT_PORT
            }),
        };

        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::from_port_var(None)
    }
}
