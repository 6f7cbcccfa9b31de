/// Configuration defaults, loading, saving and validation.
pub mod configuration;

/// ConfigurationError Display/Error implementations.
pub mod configuration_error;
