use crate::utils::error::Result;

/// Byte-level storage backend. The persistence adapter is generic over this
/// so tests can swap the filesystem out.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_path(&self) -> &str;
    fn verbose(&self) -> bool;
}
