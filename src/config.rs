use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use rand::Rng;

/// Simulated "thinking" pause before a chat answer is sent.
#[derive(Debug, Clone, Copy)]
pub struct ThinkDelay {
    min: Duration,
    max: Duration,
}

impl ThinkDelay {
    pub fn new(min: Duration, max: Duration) -> Result<Self> {
        if min > max {
            bail!("think delay min ({:?}) exceeds max ({:?})", min, max);
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Uniform sample from `[min, max]`.
    pub fn sample(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

impl Default for ThinkDelay {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(500),
            max: Duration::from_millis(1200),
        }
    }
}

pub struct Settings {
    pub bind: SocketAddr,
    pub think_delay: ThinkDelay,
    pub template_glob: String,
    pub static_dir: String,
}

impl Settings {
    /// Reads settings from the environment (and `.env` when present).
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = parse_var("PORT", 5001)?;
        let bind = bind_addr(&host, port)?;

        let defaults = ThinkDelay::default();
        let min_ms = parse_var("THINK_DELAY_MIN_MS", defaults.min.as_millis() as u64)?;
        let max_ms = parse_var("THINK_DELAY_MAX_MS", defaults.max.as_millis() as u64)?;
        let think_delay =
            ThinkDelay::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))?;

        Ok(Self {
            bind,
            think_delay,
            template_glob: env::var("TEMPLATE_GLOB")
                .unwrap_or_else(|_| "templates/**/*".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
        })
    }
}

/// Accepts IPv4 and IPv6 hosts, e.g. `0.0.0.0` or `::`.
fn bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = host
        .trim()
        .parse()
        .with_context(|| format!("HOST has invalid value {:?}", host))?;
    Ok(SocketAddr::new(ip, port))
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has invalid value {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_half_to_one_point_two_seconds() {
        let delay = ThinkDelay::default();
        assert_eq!(delay.min(), Duration::from_millis(500));
        assert_eq!(delay.max(), Duration::from_millis(1200));
    }

    #[test]
    fn samples_stay_in_range() {
        let delay = ThinkDelay::new(Duration::from_millis(10), Duration::from_millis(20)).unwrap();
        for _ in 0..200 {
            let d = delay.sample();
            assert!(d >= delay.min() && d <= delay.max(), "{:?} out of range", d);
        }
    }

    #[test]
    fn zero_width_range_is_allowed() {
        let delay = ThinkDelay::new(Duration::ZERO, Duration::ZERO).unwrap();
        assert_eq!(delay.sample(), Duration::ZERO);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(ThinkDelay::new(Duration::from_secs(2), Duration::from_secs(1)).is_err());
    }

    #[test]
    fn parse_var_falls_back_when_unset() {
        let port: u16 = parse_var("DATAENG_CHAT_TEST_UNSET_VAR", 5001).unwrap();
        assert_eq!(port, 5001);
    }

    #[test]
    fn parse_var_rejects_non_numeric_value() {
        env::set_var("DATAENG_CHAT_TEST_BAD_PORT", "abc");
        let port: Result<u16> = parse_var("DATAENG_CHAT_TEST_BAD_PORT", 5001);
        env::remove_var("DATAENG_CHAT_TEST_BAD_PORT");
        let err = port.unwrap_err();
        assert!(err.to_string().contains("DATAENG_CHAT_TEST_BAD_PORT"), "{}", err);
    }

    #[test]
    fn bind_addr_accepts_ipv4_and_ipv6() {
        assert_eq!(bind_addr("0.0.0.0", 5001).unwrap().to_string(), "0.0.0.0:5001");
        assert_eq!(bind_addr("::", 5001).unwrap().to_string(), "[::]:5001");
        assert_eq!(bind_addr("::1", 80).unwrap().to_string(), "[::1]:80");
    }

    #[test]
    fn bind_addr_rejects_unparseable_host() {
        assert!(bind_addr("not a host", 5001).is_err());
        assert!(bind_addr("127.0.0.1:80", 5001).is_err());
    }
}
