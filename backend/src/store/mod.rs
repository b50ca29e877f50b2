//! The in-memory data store backing every endpoint.
//!
//! All three collections are loaded from CSV before the HTTP listener binds
//! and live in one `Store` shared across handlers as `web::Data`. Users are
//! read-only; albums have full CRUD; photos support delete only.
//!
//! Album mutations hold the write lock across the CSV rewrite: the change is
//! applied in memory, the file write is awaited, and on failure the change is
//! rolled back before the error reaches the handler. A response therefore
//! never reports success for a mutation that did not make it to disk, and two
//! concurrent mutations cannot interleave their file writes.

mod error;
pub mod load;
pub mod persist;

pub use error::StoreError;

use common::model::album::Album;
use common::model::photo::Photo;
use common::model::user::User;
use log::info;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub struct Store {
    pub users: Vec<User>,
    pub albums: RwLock<Vec<Album>>,
    pub photos: RwLock<Vec<Photo>>,
    albums_csv: PathBuf,
}

impl Store {
    /// Loads users, albums and photos sequentially from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self, StoreError> {
        let users = load::load_users(&data_dir.join("users.csv"))?;
        info!("CSV file {} successfully processed", data_dir.join("users.csv").display());
        let albums: Vec<Album> = load::read_csv(&data_dir.join("albums.csv"))?;
        info!("CSV file {} successfully processed", data_dir.join("albums.csv").display());
        let photos: Vec<Photo> = load::read_csv(&data_dir.join("photos.csv"))?;
        info!("CSV file {} successfully processed", data_dir.join("photos.csv").display());

        info!(
            "Loaded {} users, {} albums, {} photos",
            users.len(),
            albums.len(),
            photos.len()
        );
        Ok(Self::new(users, albums, photos, data_dir.join("albums.csv")))
    }

    pub fn new(
        users: Vec<User>,
        albums: Vec<Album>,
        photos: Vec<Photo>,
        albums_csv: PathBuf,
    ) -> Self {
        Self {
            users,
            albums: RwLock::new(albums),
            photos: RwLock::new(photos),
            albums_csv,
        }
    }

    /// Appends an album and persists the collection. Ids are caller-assigned
    /// but must be unique across the collection.
    pub async fn add_album(&self, album: Album) -> Result<(), StoreError> {
        let mut albums = self.albums.write().await;
        if albums.iter().any(|a| a.id == album.id) {
            return Err(StoreError::DuplicateAlbum(album.id));
        }
        albums.push(album);
        if let Err(e) = persist::write_albums(&self.albums_csv, &albums).await {
            albums.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replaces an album's title and persists the collection.
    pub async fn rename_album(&self, id: u32, title: &str) -> Result<(), StoreError> {
        let mut albums = self.albums.write().await;
        let idx = albums
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::AlbumNotFound(id))?;
        let previous = std::mem::replace(&mut albums[idx].title, title.to_string());
        if let Err(e) = persist::write_albums(&self.albums_csv, &albums).await {
            albums[idx].title = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Removes an album and persists the collection.
    pub async fn delete_album(&self, id: u32) -> Result<(), StoreError> {
        let mut albums = self.albums.write().await;
        let idx = albums
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::AlbumNotFound(id))?;
        let removed = albums.remove(idx);
        if let Err(e) = persist::write_albums(&self.albums_csv, &albums).await {
            albums.insert(idx, removed);
            return Err(e);
        }
        Ok(())
    }

    /// Removes a photo. Photo deletions live only in memory; no photo CSV
    /// is ever rewritten.
    pub async fn delete_photo(&self, id: u32) -> Result<(), StoreError> {
        let mut photos = self.photos.write().await;
        let idx = photos
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::PhotoNotFound(id))?;
        photos.remove(idx);
        Ok(())
    }
}
