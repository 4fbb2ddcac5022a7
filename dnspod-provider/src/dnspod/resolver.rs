//! Zone to domain id resolution over a lazily filled domain cache.

use crate::error::{ProviderError, Result};
use crate::types::ProviderDomain;

use super::{DnspodDomain, DnspodProvider, PROVIDER};

fn find_domain_id(domains: &[DnspodDomain], name: &str) -> Option<String> {
    domains.iter().find(|d| d.name == name).map(|d| d.id.clone())
}

impl DnspodProvider {
    /// Runs `f` over the cached domain list, filling the cache on first use.
    ///
    /// Readers share the lock. On a miss the write lock is taken and the cache is
    /// checked again, so concurrent first calls issue a single `Domain.List`.
    /// An empty result leaves the cache unfilled.
    async fn with_domains<R>(&self, f: impl FnOnce(&[DnspodDomain]) -> R) -> Result<R> {
        {
            let cache = self.domains.read().await;
            if !cache.is_empty() {
                return Ok(f(cache.as_slice()));
            }
        }

        let mut cache = self.domains.write().await;
        if cache.is_empty() {
            log::debug!("[{PROVIDER}] Domain cache empty, fetching Domain.List");
            *cache = self.list_domains().await?;
        }
        Ok(f(cache.as_slice()))
    }

    /// Resolves a zone (with or without trailing dot) to its domain id.
    ///
    /// # Errors
    /// [`ProviderError::DomainNotFound`] when no domain name matches exactly.
    pub(crate) async fn resolve_domain_id(&self, zone: &str) -> Result<String> {
        let name = zone.strip_suffix('.').unwrap_or(zone);

        self.with_domains(|domains| find_domain_id(domains, name))
            .await?
            .ok_or_else(|| ProviderError::DomainNotFound {
                provider: PROVIDER.to_string(),
                domain: name.to_string(),
            })
    }

    /// Lists the domains in the account.
    ///
    /// Served from the per-instance cache after the first successful call.
    ///
    /// # Errors
    /// Transport, API and parse errors from `Domain.List`.
    pub async fn domains(&self) -> Result<Vec<ProviderDomain>> {
        self.with_domains(|domains| {
            domains
                .iter()
                .map(|d| ProviderDomain {
                    id: d.id.clone(),
                    name: d.name.clone(),
                    status: d.status.clone(),
                })
                .collect()
        })
        .await
    }
}
