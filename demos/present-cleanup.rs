//! Publishes a DNS-01 challenge record for a domain, waits, then removes it.
//!
//! ```sh
//! DYN_CUSTOMER_NAME=... DYN_USER_NAME=... DYN_PASSWORD=... \
//!   cargo run --example present-cleanup -- example.com
//! ```

use std::{env, time::Duration};

use acme_dyn::{ChallengeProvider as _, Config, Credentials, DynProvider, StaticZones};
use eyre::WrapErr as _;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let domain = env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("usage: present-cleanup <domain> [zone]"))?;

    // The zone defaults to the domain itself.
    let zone = env::args().nth(2).unwrap_or_else(|| domain.clone());

    let credentials = Credentials::new(
        env::var("DYN_CUSTOMER_NAME").unwrap_or_default(),
        env::var("DYN_USER_NAME").unwrap_or_default(),
        env::var("DYN_PASSWORD").unwrap_or_default(),
    )
    .wrap_err("set DYN_CUSTOMER_NAME, DYN_USER_NAME and DYN_PASSWORD")?;

    let config = Config::default().with_logout_on_error(true);
    let mut provider = DynProvider::with_config(credentials, StaticZones::new([zone]), config)?;

    let token = "demo-token";
    let key_auth = "demo-token.demo-thumbprint";

    if let Err(err) = provider.present(&domain, token, key_auth).await {
        eprintln!("{}", error_reporter::Report::new(&err).pretty(true));
        return Err(err.into());
    }

    let (propagation_timeout, _) = provider.timeout();
    let wait = propagation_timeout.min(Duration::from_secs(30));
    println!("TXT record presented for _acme-challenge.{domain}, removing in {wait:?}");
    tokio::time::sleep(wait).await;

    provider.clean_up(&domain, token, key_auth).await?;
    println!("TXT record removed");

    Ok(())
}
