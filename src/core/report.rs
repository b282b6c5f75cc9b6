use crate::domain::model::Package;
use crate::domain::ports::PackageLedger;
use serde::{Deserialize, Serialize};

/// Aggregate over accepted packages: how many matched and the value collected for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub total_packages: usize,
    pub total_collected: u64,
}

impl Report {
    pub fn into_tuple(self) -> (usize, u64) {
        self.into()
    }
}

impl From<Report> for (usize, u64) {
    fn from(report: Report) -> Self {
        (report.total_packages, report.total_collected)
    }
}

pub struct Reporter<'a, L: PackageLedger + ?Sized> {
    ledger: &'a L,
}

impl<'a, L: PackageLedger + ?Sized> Reporter<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Packages shipped on exactly `ship_date` (string equality).
    pub fn generate_report(&self, ship_date: &str) -> Report {
        self.summarize(|date| date == ship_date)
    }

    /// Packages shipped in `[start_ship_date, end_ship_date)`, compared as strings.
    pub fn generate_report_by_dates(&self, start_ship_date: &str, end_ship_date: &str) -> Report {
        self.summarize(|date| start_ship_date <= date && date < end_ship_date)
    }

    fn summarize(&self, matches: impl Fn(&str) -> bool) -> Report {
        let total_packages = self
            .ledger
            .shipped_packages()
            .iter()
            .filter_map(Package::ship_date)
            .filter(|date| matches(date))
            .count();

        let report = Report {
            total_packages,
            total_collected: (total_packages as u64)
                .saturating_mul(self.ledger.collected_per_package()),
        };
        tracing::debug!(
            total_packages = report.total_packages,
            total_collected = report.total_collected,
            "Report generated"
        );
        report
    }
}
