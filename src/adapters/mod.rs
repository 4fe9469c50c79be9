/// Adapters - concrete implementations
///
/// These modules implement the port traits for specific services.
pub mod services;
pub mod sources;
pub mod storage;
