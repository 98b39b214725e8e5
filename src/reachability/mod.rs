//! URL reachability checking
//!
//! Mutations that introduce URLs consult a [`UrlProbe`] before touching the
//! store. The probe is a capability passed in by the caller, so tests can
//! substitute a stub and never reach the network.

pub mod probe;

pub use probe::HttpUrlProbe;

use futures::future::BoxFuture;
use log::warn;

use crate::errors::{RegistryError, RegistryResult};
use crate::record::Record;

/// Point-in-time existence check for an externally supplied URL
///
/// Implementations never fail: anything short of a confirmed success is
/// reported as `false`.
pub trait UrlProbe: Send + Sync {
    fn check<'a>(&'a self, url: &'a str) -> BoxFuture<'a, bool>;
}

/// Probe both URLs of a record concurrently
///
/// When both fail, `image_url` is reported.
pub async fn ensure_reachable(probe: &dyn UrlProbe, record: &Record) -> RegistryResult<()> {
    let (image_ok, resource_ok) = futures::join!(
        probe.check(&record.image_url),
        probe.check(&record.resource_url)
    );

    if !image_ok {
        warn!("Record {}: image_url unreachable: {}", record.id, record.image_url);
        return Err(RegistryError::UnreachableResource {
            field: "image_url",
            url: record.image_url.clone(),
        });
    }
    if !resource_ok {
        warn!(
            "Record {}: resource_url unreachable: {}",
            record.id, record.resource_url
        );
        return Err(RegistryError::UnreachableResource {
            field: "resource_url",
            url: record.resource_url.clone(),
        });
    }
    Ok(())
}
