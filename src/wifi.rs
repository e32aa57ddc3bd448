use heapless::{String, Vec};

use crate::error::{ConfigError, bounded, check_configured};
use crate::secret::Secret;

// 802.11 limits
pub const SSID_LEN: usize = 32;
pub const PASSWORD_LEN: usize = 64;

pub const MAX_WIFI_NETWORKS: usize = 8;

/// One network the device may join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String<SSID_LEN>,
    pub password: Secret<PASSWORD_LEN>,
}

impl WifiCredentials {
    pub fn new(ssid: &str, password: &str) -> Result<Self, ConfigError> {
        check_configured("wifi_network", ssid)?;
        check_configured("wifi_password", password)?;
        Ok(WifiCredentials {
            ssid: bounded("wifi_network", ssid)?,
            password: Secret::new(bounded("wifi_password", password)?),
        })
    }
}

/// Networks in the order they should be tried. Never empty once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiNetworks {
    networks: Vec<WifiCredentials, MAX_WIFI_NETWORKS>,
}

impl WifiNetworks {
    pub fn single(ssid: &str, password: &str) -> Result<Self, ConfigError> {
        Self::from_pairs([(ssid, password)])
    }

    /// Build from (ssid, password) pairs, keeping their order.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut networks = WifiNetworks {
            networks: Vec::new(),
        };
        for (ssid, password) in pairs {
            networks.push(WifiCredentials::new(ssid, password)?)?;
        }
        if networks.is_empty() {
            return Err(ConfigError::NoWifiNetworks);
        }
        Ok(networks)
    }

    /// Pair up the parallel name and password lists of the multi-network
    /// layout. `count`, when given, must match both lists.
    pub fn from_parallel<S, P>(
        count: Option<usize>,
        ssids: &[S],
        passwords: &[P],
    ) -> Result<Self, ConfigError>
    where
        S: AsRef<str>,
        P: AsRef<str>,
    {
        let count_matches = count.is_none_or(|c| c == ssids.len());
        if !count_matches || ssids.len() != passwords.len() {
            return Err(ConfigError::WifiCountMismatch {
                count: count.unwrap_or(ssids.len()),
                networks: ssids.len(),
                passwords: passwords.len(),
            });
        }
        Self::from_pairs(
            ssids
                .iter()
                .zip(passwords)
                .map(|(ssid, password)| (ssid.as_ref(), password.as_ref())),
        )
    }

    pub fn push(&mut self, credentials: WifiCredentials) -> Result<(), ConfigError> {
        self.networks
            .push(credentials)
            .map_err(|_| ConfigError::TooManyWifiNetworks {
                max: MAX_WIFI_NETWORKS,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &WifiCredentials> {
        self.networks.iter()
    }

    pub fn first(&self) -> Option<&WifiCredentials> {
        self.networks.first()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_network() {
        let wifi = WifiNetworks::single("home", "s3cret").unwrap();
        assert_eq!(wifi.len(), 1);
        let first = wifi.first().unwrap();
        assert_eq!(first.ssid.as_str(), "home");
        assert_eq!(first.password.expose(), "s3cret");
    }

    #[test]
    fn parallel_lists_are_paired_in_order() {
        let wifi =
            WifiNetworks::from_parallel(Some(2), &["home", "office"], &["pw1", "pw2"]).unwrap();
        let pairs: std::vec::Vec<(&str, &str)> = wifi
            .iter()
            .map(|c| (c.ssid.as_str(), c.password.expose()))
            .collect();
        assert_eq!(pairs, [("home", "pw1"), ("office", "pw2")]);
    }

    #[test]
    fn count_may_be_omitted() {
        let wifi = WifiNetworks::from_parallel(None, &["a"], &["b"]).unwrap();
        assert_eq!(wifi.len(), 1);
    }

    #[test]
    fn count_must_match_both_lists() {
        assert!(matches!(
            WifiNetworks::from_parallel(Some(3), &["a", "b"], &["1", "2"]),
            Err(ConfigError::WifiCountMismatch {
                count: 3,
                networks: 2,
                passwords: 2
            })
        ));
        assert!(matches!(
            WifiNetworks::from_parallel(None, &["a", "b"], &["1"]),
            Err(ConfigError::WifiCountMismatch {
                networks: 2,
                passwords: 1,
                ..
            })
        ));
    }

    #[test]
    fn empty_lists_are_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(
            WifiNetworks::from_parallel(Some(0), &none, &none),
            Err(ConfigError::NoWifiNetworks)
        ));
    }

    #[test]
    fn too_many_networks_are_rejected() {
        let names = ["n"; MAX_WIFI_NETWORKS + 1];
        assert!(matches!(
            WifiNetworks::from_parallel(None, &names, &names),
            Err(ConfigError::TooManyWifiNetworks { max: MAX_WIFI_NETWORKS })
        ));
    }

    #[test]
    fn placeholder_credentials_are_rejected() {
        assert!(matches!(
            WifiNetworks::single("TODO", "TODO"),
            Err(ConfigError::Placeholder("wifi_network"))
        ));
        assert!(matches!(
            WifiNetworks::single("home", ""),
            Err(ConfigError::EmptyField("wifi_password"))
        ));
    }

    #[test]
    fn overlong_ssid_is_rejected() {
        let ssid = "x".repeat(SSID_LEN + 1);
        assert!(matches!(
            WifiCredentials::new(&ssid, "pw"),
            Err(ConfigError::FieldTooLong("wifi_network"))
        ));
    }
}
