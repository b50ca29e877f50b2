use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("album {0} not found")]
    AlbumNotFound(u32),

    #[error("photo {0} not found")]
    PhotoNotFound(u32),

    #[error("album {0} already exists")]
    DuplicateAlbum(u32),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
