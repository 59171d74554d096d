//! # Shop Configuration
//!
//! [`ShopConfig::default`] staffs a full shop: ten named chefs, seven
//! delivery staff based at `2-1-n`, and the public menu document. Every value can be
//! overridden with the `with_*` setters or from the environment:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `TAKEOUT_CATALOG_URL` | Menu location (`http(s)://` URL or local path) |
//! | `TAKEOUT_RECEIPT_DIR` | Directory receipts are written to |
//! | `TAKEOUT_PREP_MS` | Preparation time per order, in milliseconds |
//! | `TAKEOUT_DELIVERY_MS` | Delivery time per order, in milliseconds |
//! | `TAKEOUT_DELIVERY_STAFF` | Number of delivery staff |
//! | `TAKEOUT_MENU_BUFFER` | Capacity of the menu actor's request channel |

use crate::kitchen::{Chef, DeliveryPerson};
use crate::model::Address;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CATALOG_URL: &str = "https://cscie-55-out.s3.amazonaws.com/menu7.json";

pub const DEFAULT_CHEFS: [&str; 10] = [
    "James Beard",
    "Melissa Clark",
    "Gordon Ramsey",
    "Ayesha Curry",
    "Anthony Bourdain",
    "Julia Child",
    "Gaida De Laurentis",
    "Jamie Oliver",
    "Jiro Ono",
    "Alice Waters",
];

pub const DEFAULT_DELIVERY_STAFF: u32 = 7;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub catalog_url: String,
    pub receipt_dir: PathBuf,
    pub prep_time: Duration,
    pub delivery_time: Duration,
    pub chefs: Vec<String>,
    pub delivery_staff: u32,
    pub menu_buffer: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            receipt_dir: PathBuf::from("receipts"),
            prep_time: Duration::from_millis(50),
            delivery_time: Duration::from_millis(50),
            chefs: DEFAULT_CHEFS.iter().map(|name| name.to_string()).collect(),
            delivery_staff: DEFAULT_DELIVERY_STAFF,
            menu_buffer: 32,
        }
    }
}

impl ShopConfig {
    /// Defaults overridden by whatever `TAKEOUT_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by the values `lookup` returns.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("TAKEOUT_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Some(dir) = lookup("TAKEOUT_RECEIPT_DIR") {
            config.receipt_dir = PathBuf::from(dir);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "TAKEOUT_PREP_MS")? {
            config.prep_time = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "TAKEOUT_DELIVERY_MS")? {
            config.delivery_time = Duration::from_millis(ms);
        }
        if let Some(count) = parse_var::<u32>(&lookup, "TAKEOUT_DELIVERY_STAFF")? {
            config.delivery_staff = count;
        }
        if let Some(buffer) = parse_var::<usize>(&lookup, "TAKEOUT_MENU_BUFFER")? {
            if buffer == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "TAKEOUT_MENU_BUFFER",
                    value: buffer.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.menu_buffer = buffer;
        }

        Ok(config)
    }

    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    pub fn with_receipt_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.receipt_dir = dir.into();
        self
    }

    pub fn with_prep_time(mut self, prep_time: Duration) -> Self {
        self.prep_time = prep_time;
        self
    }

    pub fn with_delivery_time(mut self, delivery_time: Duration) -> Self {
        self.delivery_time = delivery_time;
        self
    }

    pub fn with_chefs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chefs = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_delivery_staff(mut self, count: u32) -> Self {
        self.delivery_staff = count;
        self
    }

    /// Clamped to at least one slot.
    pub fn with_menu_buffer(mut self, buffer: usize) -> Self {
        self.menu_buffer = buffer.max(1);
        self
    }

    pub fn chef_roster(&self) -> Vec<Chef> {
        self.chefs.iter().map(Chef::new).collect()
    }

    /// `Thomas Sims{n}`, based at `2-1-n`, for `n` in `1..=delivery_staff`.
    pub fn delivery_roster(&self) -> Vec<DeliveryPerson> {
        (1..=self.delivery_staff)
            .map(|n| DeliveryPerson::new("Thomas", format!("Sims{}", n), Address::new(2, 1, n)))
            .collect()
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_roster() {
        let config = ShopConfig::default();
        assert_eq!(config.chefs.len(), 10);
        assert_eq!(config.chefs[0], "James Beard");
        assert_eq!(config.menu_buffer, 32);

        let staff = config.delivery_roster();
        assert_eq!(staff.len(), 7);
        assert_eq!(staff[0].to_string(), "Thomas Sims1");
        assert_eq!(staff[6].home, Address::new(2, 1, 7));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ShopConfig::from_lookup(lookup_from(&[
            ("TAKEOUT_CATALOG_URL", "menu.json"),
            ("TAKEOUT_PREP_MS", "5"),
            ("TAKEOUT_DELIVERY_MS", " 7 "),
            ("TAKEOUT_DELIVERY_STAFF", "2"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_url, "menu.json");
        assert_eq!(config.prep_time, Duration::from_millis(5));
        assert_eq!(config.delivery_time, Duration::from_millis(7));
        assert_eq!(config.delivery_roster().len(), 2);
        // Untouched values keep their defaults.
        assert_eq!(config.receipt_dir, PathBuf::from("receipts"));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result = ShopConfig::from_lookup(lookup_from(&[("TAKEOUT_PREP_MS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "TAKEOUT_PREP_MS", .. })
        ));
    }

    #[test]
    fn test_zero_menu_buffer_is_rejected() {
        let result = ShopConfig::from_lookup(lookup_from(&[("TAKEOUT_MENU_BUFFER", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = ShopConfig::default()
            .with_chefs(["Solo"])
            .with_delivery_staff(1)
            .with_menu_buffer(0);

        assert_eq!(config.chef_roster(), vec![Chef::new("Solo")]);
        assert_eq!(config.menu_buffer, 1);
    }
}
