use crate::domain::model::Package;

/// Read access to the packages a company has accepted, in acceptance order.
pub trait PackageLedger {
    fn shipped_packages(&self) -> &[Package];

    /// Flat value collected for every accepted package.
    fn collected_per_package(&self) -> u64;
}
