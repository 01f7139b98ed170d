use std::time::Duration;

use reqwest::{Method, StatusCode};

use crate::{
    api,
    challenge::{ChallengeProvider, Dns01Record},
    config::{Config, Credentials},
    error::{Error, Result},
    session::SessionClient,
    util::un_fqdn,
    zone::ZoneResolver,
};

const PRESENT_NOTE: &str = "Added TXT record for ACME dns-01 challenge";
const CLEAN_UP_NOTE: &str = "Removed TXT record for ACME dns-01 challenge";

/// [`ChallengeProvider`] publishing challenge records through Dyn Managed DNS.
///
/// Both operations run the same sequence, each step only after the previous one succeeded:
///
/// 1. find the zone for `_acme-challenge.<domain>.` with the [`ZoneResolver`];
/// 2. log in;
/// 3. create (or delete) the `TXT` record;
/// 4. publish the zone so the change goes live;
/// 5. log out.
///
/// Nothing is rolled back when a step fails. A record created before a failed publish stays
/// pending, and the session stays open unless [`Config::with_logout_on_error`] is set.
///
/// The provider owns a single [`SessionClient`]; calls need `&mut self` and so never overlap.
#[derive(Debug)]
pub struct DynProvider<R> {
    client: SessionClient,
    resolver: R,
    config: Config,
}

impl<R: ZoneResolver> DynProvider<R> {
    /// Creates a provider against the production Dyn API.
    pub fn new(customer_name: &str, user_name: &str, password: &str, resolver: R) -> Result<Self> {
        let credentials = Credentials::new(customer_name, user_name, password)?;
        Self::with_config(credentials, resolver, Config::default())
    }

    pub fn with_config(credentials: Credentials, resolver: R, config: Config) -> Result<Self> {
        let client = SessionClient::with_config(credentials, &config)?;

        Ok(DynProvider {
            client,
            resolver,
            config,
        })
    }

    /// The session client used for all API calls.
    pub fn session(&self) -> &SessionClient {
        &self.client
    }

    async fn find_zone(&self, fqdn: &str) -> Result<String> {
        let zone = self
            .resolver
            .find_zone_by_fqdn(fqdn)
            .await
            .map_err(|reason| Error::ZoneResolution {
                fqdn: fqdn.to_owned(),
                reason,
            })?;

        Ok(un_fqdn(&zone).to_owned())
    }

    async fn create_record(&self, zone: &str, record: &Dns01Record) -> Result<()> {
        let resource = record_resource(zone, &record.fqdn);
        let body = api::TxtRecord::new(&record.value, record.ttl);

        self.client
            .send_request(Method::POST, &resource, &body)
            .await?;

        Ok(())
    }

    async fn delete_record(&self, zone: &str, fqdn: &str) -> Result<()> {
        let resource = record_resource(zone, fqdn);
        let status = self.client.send_delete(&resource).await?;

        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                resource,
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    async fn publish(&self, zone: &str, notes: &str) -> Result<()> {
        let resource = format!("Zone/{zone}/");

        self.client
            .send_request(Method::PUT, &resource, &api::PublishZone::new(notes))
            .await?;

        Ok(())
    }

    /// Logs out after the steps following login, or returns their error.
    async fn finish(&mut self, res: Result<()>) -> Result<()> {
        match res {
            Ok(()) => self.client.logout().await,

            Err(err) if self.config.logout_on_error() => {
                if let Err(logout_err) = self.client.logout().await {
                    log::warn!("Failed to close Dyn session after error: {logout_err}");
                }
                Err(err)
            }

            Err(err) => Err(err),
        }
    }
}

impl<R> ChallengeProvider for DynProvider<R>
where
    R: ZoneResolver + Send + Sync,
{
    async fn present(&mut self, domain: &str, _token: &str, key_auth: &str) -> Result<()> {
        let record = Dns01Record::new(domain, key_auth);
        let zone = self.find_zone(&record.fqdn).await?;

        log::debug!("Presenting {} in zone {zone}", record.fqdn);

        self.client.login().await?;

        let res = async {
            self.create_record(&zone, &record).await?;
            self.publish(&zone, PRESENT_NOTE).await
        }
        .await;

        self.finish(res).await
    }

    async fn clean_up(&mut self, domain: &str, _token: &str, key_auth: &str) -> Result<()> {
        let record = Dns01Record::new(domain, key_auth);
        let zone = self.find_zone(&record.fqdn).await?;

        log::debug!("Cleaning up {} in zone {zone}", record.fqdn);

        self.client.login().await?;

        let res = async {
            self.delete_record(&zone, &record.fqdn).await?;
            self.publish(&zone, CLEAN_UP_NOTE).await
        }
        .await;

        self.finish(res).await
    }

    fn timeout(&self) -> (Duration, Duration) {
        (
            self.config.propagation_timeout(),
            self.config.polling_interval(),
        )
    }
}

fn record_resource(zone: &str, fqdn: &str) -> String {
    format!("TXTRecord/{zone}/{}/", un_fqdn(fqdn))
}
