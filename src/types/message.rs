use serde::{Deserialize, Serialize};

/// One direct message, as stored in the message collection.
///
/// `create_time` is unix seconds; `_id` is assigned by the message service's
/// ID generator, not by the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: i64,
    pub to_user_id: i64,
    pub from_user_id: i64,
    pub convert_id: String,
    pub content: String,
    pub create_time: i64,
}

impl Message {
    /// Conversation key shared by both directions of a chat:
    /// `"{min_user_id}_{max_user_id}"`. This is the equality prefix of the
    /// conversation index.
    pub fn conversation_id(user_id: i64, peer_id: i64) -> String {
        if user_id < peer_id {
            format!("{}_{}", user_id, peer_id)
        } else {
            format!("{}_{}", peer_id, user_id)
        }
    }
}
