//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BalanceBeamPaths;
pub use settings::Settings;
