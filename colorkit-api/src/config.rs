use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Largest `steps` value accepted by the interpolation endpoint by default
pub const DEFAULT_MAX_STEPS: i64 = 1024;

/// Server settings, read from the command line or `COLORKIT_*` variables
#[derive(Debug, Clone, Parser)]
#[command(
    name = "colorkit-api",
    about = "HTTP service for color conversion and interpolation",
    version
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "COLORKIT_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "COLORKIT_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Maximum step count accepted by /api/color/dealers-choice
    #[arg(long, env = "COLORKIT_MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: i64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
