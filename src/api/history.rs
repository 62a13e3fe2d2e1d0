use std::sync::{Arc, RwLock};

use kurd_core::history::{now_millis, HistoryLog};

use super::{KurdConversion, KurdError, KurdHistoryEntry};

/// Session history shared with the host. Writes are serialized by the lock.
#[derive(uniffi::Object)]
pub struct KurdHistory {
    pub(crate) inner: Arc<RwLock<HistoryLog>>,
}

#[uniffi::export]
impl KurdHistory {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(RwLock::new(HistoryLog::new())),
        })
    }

    /// Record a conversion; returns the new entry, or `None` when the input
    /// is too short to keep.
    pub fn record(&self, conversion: KurdConversion) -> Result<Option<KurdHistoryEntry>, KurdError> {
        let mut h = self
            .inner
            .write()
            .map_err(|e| KurdError::Internal { msg: e.to_string() })?;
        Ok(h
            .record_conversion(&conversion.into(), now_millis())
            .map(KurdHistoryEntry::from))
    }

    /// Newest first.
    pub fn entries(&self) -> Result<Vec<KurdHistoryEntry>, KurdError> {
        let h = self
            .inner
            .read()
            .map_err(|e| KurdError::Internal { msg: e.to_string() })?;
        Ok(h.entries().map(KurdHistoryEntry::from).collect())
    }

    pub fn len(&self) -> Result<u32, KurdError> {
        let h = self
            .inner
            .read()
            .map_err(|e| KurdError::Internal { msg: e.to_string() })?;
        Ok(h.len() as u32)
    }

    pub fn is_empty(&self) -> Result<bool, KurdError> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> Result<(), KurdError> {
        self.inner
            .write()
            .map_err(|e| KurdError::Internal { msg: e.to_string() })?
            .clear();
        Ok(())
    }
}
