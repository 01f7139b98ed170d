//! Solving ACME DNS-01 challenges with [Dyn Managed DNS](https://help.dyn.com/rest/).
//!
//! An ACME client proves control over a domain for a DNS-01 challenge by publishing a `TXT`
//! record at `_acme-challenge.<domain>`. This crate creates and removes that record through the
//! Dyn REST API.
//!
//! # Usage
//!
//! Build a [`DynProvider`] from your Dyn credentials and a [`ZoneResolver`], then call
//! [`present`] before asking the CA to validate and [`clean_up`] afterwards:
//!
//! ```no_run
//! use acme_dyn::{ChallengeProvider as _, DynProvider, StaticZones};
//!
//! async fn solve(domain: &str, token: &str, key_auth: &str) -> eyre::Result<()> {
//!     let zones = StaticZones::new(["example.com"]);
//!     let mut provider = DynProvider::new("customer", "user", "password", zones)?;
//!
//!     provider.present(domain, token, key_auth).await?;
//!     // ... let the CA validate the challenge ...
//!     provider.clean_up(domain, token, key_auth).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sessions
//!
//! Every operation opens its own Dyn session, makes its change, publishes the zone and closes
//! the session again. [`SessionClient`] exposes those steps directly for other uses of the API.
//!
//! Dyn answers slow requests with HTTP 307 and a job to poll. Polling is not implemented; such
//! responses fail with [`Error::UnsupportedAsyncJob`].
//!
//! [`present`]: ChallengeProvider::present()
//! [`clean_up`]: ChallengeProvider::clean_up()

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]

mod challenge;
mod config;
mod error;
mod provider;
mod session;
mod util;
mod zone;

pub mod api;


pub use crate::{
    challenge::{ChallengeProvider, Dns01Record, DNS01_TTL},
    config::{Config, Credentials, DYN_BASE_URL},
    error::{Error, Result},
    provider::DynProvider,
    session::SessionClient,
    zone::{StaticZones, ZoneResolver},
};
