/// Application configuration module
use chrono_tz::Tz;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_USNO_API_URL: &str = "https://aa.usno.navy.mil/api/rstt/oneday";
pub const DEFAULT_APOD_API_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Pasadena, CA
pub const OBSERVER_LOCATION: Coordinates = Coordinates {
    latitude: 34.1478,
    longitude: -118.1445,
};

pub const OBSERVER_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub nasa_api_key: String,
    pub usno_api_url: String,
    pub apod_api_url: String,
    pub location: Coordinates,
    pub timezone: Tz,
    pub static_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

/// Geographic position of the observer, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let nasa_api_key = env::var("NASA_API_KEY").unwrap_or_default();

        let usno_api_url =
            env::var("USNO_API_URL").unwrap_or_else(|_| DEFAULT_USNO_API_URL.to_string());

        let apod_api_url =
            env::var("APOD_API_URL").unwrap_or_else(|_| DEFAULT_APOD_API_URL.to_string());

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| anyhow::anyhow!("invalid BIND_ADDR {raw:?}: {e}"))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        Ok(Self {
            nasa_api_key,
            usno_api_url,
            apod_api_url,
            location: OBSERVER_LOCATION,
            timezone: OBSERVER_TIMEZONE,
            static_dir,
            bind_addr,
        })
    }
}
