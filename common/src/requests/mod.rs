use serde::{Deserialize, Serialize};

/// Request payload for `POST /albums`. The caller supplies the id; the
/// server rejects it if an album with that id already exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
}

/// Request payload for `PUT /albums/{id}`: only the title can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAlbumRequest {
    pub title: String,
}
