pub mod company_config;

pub use company_config::{CompanyConfig, FailureMode};
