// ABOUTME: Core configuration types shared by nodejoin packages
// ABOUTME: Holds the bootstrap parameters a join flow reads and writes

pub mod types;

// Re-export main types
pub use types::{mask_given_token, BootstrapParams, DiscoveryParams};
