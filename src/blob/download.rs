//! Download trigger that records requests
//!
//! Stands in for a browser download: each request is logged and kept so the
//! console can report it.

use log::info;

use super::DownloadTrigger;
use crate::entity::PayloadHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub handle: PayloadHandle,
    pub suggested_name: String,
}

#[derive(Debug, Default)]
pub struct DownloadLog {
    requests: Vec<DownloadRequest>,
}

impl DownloadLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[DownloadRequest] {
        &self.requests
    }

    pub fn last(&self) -> Option<&DownloadRequest> {
        self.requests.last()
    }
}

impl DownloadTrigger for DownloadLog {
    fn trigger(&mut self, handle: &PayloadHandle, suggested_name: &str) {
        info!("Download requested: {} as {}", handle, suggested_name);
        self.requests.push(DownloadRequest {
            handle: handle.clone(),
            suggested_name: suggested_name.to_string(),
        });
    }
}
