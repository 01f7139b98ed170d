//! Finding the zone a record belongs to.

use std::future::{self, Future};

use crate::util::un_fqdn;

/// Maps a fully qualified record name to the authoritative zone that holds it.
///
/// A typical implementation walks up the name querying recursive nameservers for an `SOA`
/// record. Zone names are returned without the trailing dot.
pub trait ZoneResolver {
    fn find_zone_by_fqdn(&self, fqdn: &str) -> impl Future<Output = eyre::Result<String>> + Send;
}

/// Resolves zones from a fixed list, picking the longest one containing the name.
///
/// ```
/// # async fn run() -> eyre::Result<()> {
/// use acme_dyn::{StaticZones, ZoneResolver as _};
///
/// let zones = StaticZones::new(["example.com", "dev.example.com"]);
/// let zone = zones.find_zone_by_fqdn("_acme-challenge.api.dev.example.com.").await?;
/// assert_eq!(zone, "dev.example.com");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticZones {
    zones: Vec<String>,
}

impl StaticZones {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let zones = zones
            .into_iter()
            .map(|zone| un_fqdn(zone.as_ref()).to_ascii_lowercase())
            .filter(|zone| !zone.is_empty())
            .collect();

        StaticZones { zones }
    }

    fn lookup(&self, fqdn: &str) -> eyre::Result<String> {
        let name = un_fqdn(fqdn).to_ascii_lowercase();

        self.zones
            .iter()
            .filter(|zone| {
                name == **zone
                    || name
                        .strip_suffix(zone.as_str())
                        .is_some_and(|rest| rest.ends_with('.'))
            })
            .max_by_key(|zone| zone.len())
            .cloned()
            .ok_or_else(|| eyre::eyre!("no configured zone contains {fqdn}"))
    }
}

impl ZoneResolver for StaticZones {
    fn find_zone_by_fqdn(&self, fqdn: &str) -> impl Future<Output = eyre::Result<String>> + Send {
        future::ready(self.lookup(fqdn))
    }
}
