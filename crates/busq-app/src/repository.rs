//! Repository adapters for persistence layer

use std::path::PathBuf;

use busq_infra::persistence::KeyValueReservationRepository;
use busq_store::FileStore;
use busq_types::Result;

use crate::config::Config;

pub type FileReservationRepository = KeyValueReservationRepository<FileStore>;

/// Open the file-backed key-value store
pub fn open_store(config: &Config) -> Result<FileStore> {
    FileStore::open(config.store_dir()?)
}

/// Open the key-value store at a custom directory
pub fn open_store_at(store_dir: PathBuf) -> Result<FileStore> {
    FileStore::open(store_dir)
}

/// Open the reservation repository over the configured store
pub fn open_reservation_repo(config: &Config) -> Result<FileReservationRepository> {
    Ok(KeyValueReservationRepository::new(open_store(config)?))
}

/// Open the reservation repository at a custom directory
pub fn open_reservation_repo_at(store_dir: PathBuf) -> Result<FileReservationRepository> {
    Ok(KeyValueReservationRepository::new(open_store_at(store_dir)?))
}
