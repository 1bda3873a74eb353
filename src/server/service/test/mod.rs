use async_trait::async_trait;
use std::{io, sync::Mutex};

use crate::server::util::file_store::FileStore;

mod apartment;
mod attraction;
mod reservation;
mod review;

/// File store that records purged paths instead of touching the filesystem.
#[derive(Default)]
pub struct RecordingFileStore {
    purged: Mutex<Vec<String>>,
}

impl RecordingFileStore {
    pub fn purged(&self) -> Vec<String> {
        self.purged.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStore for RecordingFileStore {
    async fn purge_file(&self, path: &str) -> io::Result<()> {
        self.purged.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
