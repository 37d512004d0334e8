use async_trait::async_trait;
use sakura_dns_application::ports::{DnsHostingPort, PropagationProbe};
use sakura_dns_domain::{DomainError, Record, Zone};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockDnsHosting {
    zones: Arc<RwLock<Vec<Zone>>>,
    searches: Arc<Mutex<Vec<Option<String>>>>,
    updates: Arc<Mutex<Vec<(String, Vec<Record>)>>>,
    hide_from_filtered_search: Arc<RwLock<bool>>,
}

impl MockDnsHosting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        let mock = Self::new();
        *mock.zones.write().unwrap() = zones;
        mock
    }

    /// Filtered searches return nothing, as when the API's partial match misses.
    pub fn hide_from_filtered_search(&self) {
        *self.hide_from_filtered_search.write().unwrap() = true;
    }

    pub fn searches(&self) -> Vec<Option<String>> {
        self.searches.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(String, Vec<Record>)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsHostingPort for MockDnsHosting {
    async fn search_zones(&self, name_filter: Option<&str>) -> Result<Vec<Zone>, DomainError> {
        self.searches
            .lock()
            .unwrap()
            .push(name_filter.map(str::to_string));

        let zones = self.zones.read().unwrap();
        let found = match name_filter {
            None => zones.clone(),
            Some(_) if *self.hide_from_filtered_search.read().unwrap() => vec![],
            Some(filter) => zones
                .iter()
                .filter(|z| z.fqdn.contains(filter))
                .cloned()
                .collect(),
        };
        Ok(found)
    }

    async fn update_records(&self, zone_id: &str, records: &[Record]) -> Result<Zone, DomainError> {
        self.updates
            .lock()
            .unwrap()
            .push((zone_id.to_string(), records.to_vec()));

        let mut zones = self.zones.write().unwrap();
        let zone = zones
            .iter_mut()
            .find(|z| z.id == zone_id)
            .ok_or_else(|| DomainError::HostingApi(format!("no zone {}", zone_id)))?;
        zone.records = records.to_vec();
        Ok(zone.clone())
    }
}

/// Probe answering from a script, then repeating `fallback` forever.
pub struct ScriptedProbe {
    script: Mutex<VecDeque<Result<bool, DomainError>>>,
    fallback: Result<bool, DomainError>,
    latency: Duration,
    calls: AtomicUsize,
}

impl ScriptedProbe {
    pub fn new(script: Vec<Result<bool, DomainError>>, fallback: Result<bool, DomainError>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(result: Result<bool, DomainError>) -> Self {
        Self::new(vec![], result)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PropagationProbe for ScriptedProbe {
    async fn probe(&self, _zone: &Zone, _record: &Record) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}
