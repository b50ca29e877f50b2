use serde::{Deserialize, Serialize};

/// A photo belonging to an album. `user_id` duplicates the owning album's
/// owner so photo queries can match on both keys without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u32,
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}
