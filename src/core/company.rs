use crate::config::company_config::{CompanyConfig, FailureMode, DEFAULT_COLLECTED_PER_PACKAGE};
use crate::core::report::{Report, Reporter};
use crate::domain::model::{Client, Package};
use crate::domain::ports::PackageLedger;
use crate::utils::error::{Result, TransportError, TransportRejection};
use crate::utils::validation::validate_ship_date;
use std::sync::Arc;

/// A company that registers clients, accepts their packages for transport and
/// reports on what it shipped.
#[derive(Debug)]
pub struct AirCompany {
    name: String,
    clients: Vec<Arc<Client>>,
    packages: Vec<Package>,
    collected_per_package: u64,
    failure_mode: FailureMode,
}

impl AirCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clients: Vec::new(),
            packages: Vec::new(),
            collected_per_package: DEFAULT_COLLECTED_PER_PACKAGE,
            failure_mode: FailureMode::default(),
        }
    }

    pub fn from_config(config: &CompanyConfig) -> Result<Self> {
        config.validate_config()?;
        Ok(Self {
            collected_per_package: config.collected_per_package(),
            failure_mode: config.failure_mode(),
            ..Self::new(config.name())
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clients(&self) -> &[Arc<Client>] {
        &self.clients
    }

    /// Accepted packages, in acceptance order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    /// Appends to the roster. Names are not deduplicated.
    pub fn add_client(&mut self, client: impl Into<Arc<Client>>) {
        let client = client.into();
        tracing::debug!(company = %self.name, client = client.name(), "Registered client");
        self.clients.push(client);
    }

    /// Membership is decided by name, not by identity.
    pub fn is_client(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.name() == client.name())
    }

    /// Accepts `package` for transport on `ship_date`.
    ///
    /// On success the package is marked transported, stored, and a reference to the
    /// stored copy is returned. On failure nothing changes and the package comes back
    /// inside the rejection, unless the company runs in [`FailureMode::Panic`].
    pub fn transport_package(
        &mut self,
        mut package: Package,
        ship_date: &str,
    ) -> std::result::Result<&Package, TransportRejection> {
        if let Err(reason) = self.check_transport(&package, ship_date) {
            tracing::warn!(
                company = %self.name,
                client = package.client().name(),
                origin = package.origin(),
                destination = package.destination(),
                ship_date,
                suggestion = reason.recovery_suggestion(),
                "Package rejected: {}",
                reason
            );
            if self.failure_mode == FailureMode::Panic {
                panic!("{}", reason);
            }
            return Err(TransportRejection { reason, package });
        }

        package.mark_transported(ship_date);
        tracing::debug!(
            company = %self.name,
            client = package.client().name(),
            origin = package.origin(),
            destination = package.destination(),
            ship_date,
            "Package accepted"
        );

        let index = self.packages.len();
        self.packages.push(package);
        Ok(&self.packages[index])
    }

    fn check_transport(
        &self,
        package: &Package,
        ship_date: &str,
    ) -> std::result::Result<(), TransportError> {
        let valid_date = validate_ship_date(ship_date);
        let valid_client = self.is_client(package.client());

        match (valid_date, valid_client) {
            (false, false) => Err(TransportError::InvalidShipDateAndClient {
                client: package.client().name().to_string(),
            }),
            (false, true) => Err(TransportError::InvalidShipDate),
            (true, false) => Err(TransportError::InvalidClient {
                client: package.client().name().to_string(),
            }),
            (true, true) if !package.has_distinct_endpoints() => {
                Err(TransportError::SameOriginDestination)
            }
            (true, true) => Ok(()),
        }
    }

    pub fn generate_report(&self, ship_date: &str) -> Report {
        Reporter::new(self).generate_report(ship_date)
    }

    pub fn generate_report_by_dates(&self, start_ship_date: &str, end_ship_date: &str) -> Report {
        Reporter::new(self).generate_report_by_dates(start_ship_date, end_ship_date)
    }
}

impl PackageLedger for AirCompany {
    fn shipped_packages(&self) -> &[Package] {
        &self.packages
    }

    fn collected_per_package(&self) -> u64 {
        self.collected_per_package
    }
}
