#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Re-hash media files that already exist and replace the ones that do not match.
    pub verify_existing: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub downloaded: usize,
    pub skipped: usize,
    /// Existing files that failed re-verification and were downloaded again.
    pub replaced: usize,
    pub bytes_downloaded: u64,
}
