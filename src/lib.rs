pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::company_config::{CompanyConfig, FailureMode};
pub use crate::core::company::AirCompany;
pub use crate::core::report::{Report, Reporter};
pub use crate::core::shared::SharedAirCompany;
pub use crate::domain::model::{Client, Package};
pub use crate::domain::ports::PackageLedger;
pub use crate::utils::error::{CargoError, Result, TransportError, TransportRejection};
