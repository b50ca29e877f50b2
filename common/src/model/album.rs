use serde::{Deserialize, Serialize};

/// An album as stored in `albums.csv`: exactly the three persisted columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
}

/// An album as returned by `GET /albums`: the stored fields plus the
/// derived `photoCount`, computed per request and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub photo_count: usize,
}
