//! Default values and environment keys for the completion client

/// Endpoint and sampling defaults
pub mod defaults {
    /// Base URL of the hosted model API
    pub const BASE_URL: &str = "https://api.deepseek.com";
    /// Model identifier sent with every request
    pub const MODEL: &str = "deepseek-coder";
    /// Sampling temperature sent with every request
    pub const TEMPERATURE: f32 = 0.7;
}

/// Environment variable names
pub mod env {
    /// Holds the bearer credential for the model API
    pub const API_KEY: &str = "TRACERY_API_KEY";
}
