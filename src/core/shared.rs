use crate::core::company::AirCompany;
use crate::core::report::Report;
use crate::domain::model::{Client, Package};
use crate::utils::error::TransportRejection;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An [`AirCompany`] that can be shared across threads.
///
/// One lock guards the whole company, so the membership check and the append
/// in `transport_package` happen as a single step.
#[derive(Debug, Clone)]
pub struct SharedAirCompany {
    inner: Arc<Mutex<AirCompany>>,
}

impl SharedAirCompany {
    pub fn new(company: AirCompany) -> Self {
        Self {
            inner: Arc::new(Mutex::new(company)),
        }
    }

    // Acceptance never leaves partial state behind, so a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, AirCompany> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_client(&self, client: impl Into<Arc<Client>>) {
        self.lock().add_client(client);
    }

    /// Returns a snapshot of the accepted package.
    pub fn transport_package(
        &self,
        package: Package,
        ship_date: &str,
    ) -> Result<Package, TransportRejection> {
        self.lock()
            .transport_package(package, ship_date)
            .map(Package::clone)
    }

    pub fn generate_report(&self, ship_date: &str) -> Report {
        self.lock().generate_report(ship_date)
    }

    pub fn generate_report_by_dates(&self, start_ship_date: &str, end_ship_date: &str) -> Report {
        self.lock()
            .generate_report_by_dates(start_ship_date, end_ship_date)
    }

    pub fn package_count(&self) -> usize {
        self.lock().packages().len()
    }

    pub fn client_count(&self) -> usize {
        self.lock().clients().len()
    }

    pub fn with_company<R>(&self, f: impl FnOnce(&AirCompany) -> R) -> R {
        f(&self.lock())
    }
}

impl From<AirCompany> for SharedAirCompany {
    fn from(company: AirCompany) -> Self {
        Self::new(company)
    }
}
