use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Produces opaque unique string identifiers. Injected into the assembler
/// so tests can use deterministic ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn ref_path(&self) -> &str;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
}
