//! Album persistence. There is no incremental update: every mutation
//! serializes the whole collection and overwrites `albums.csv` in one write.

use super::StoreError;
use common::model::album::Album;
use std::path::Path;

/// Rewrites `path` with the full album collection. The header is always the
/// fixed `userId,id,title` triple, even when the collection is empty.
pub async fn write_albums(path: &Path, albums: &[Album]) -> Result<(), StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["userId", "id", "title"])?;
    for album in albums {
        writer.write_record([
            album.user_id.to_string(),
            album.id.to_string(),
            album.title.clone(),
        ])?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    tokio::fs::write(path, data).await?;
    Ok(())
}
