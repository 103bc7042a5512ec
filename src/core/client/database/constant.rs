/// Collection name for direct messages
///
/// Each document is one message between two users. The collection is
/// schemaless on the driver side; the `Message` type in `types::message`
/// describes the shape the message service reads and writes.
pub const MESSAGE_COLLECTION: &str = "message";

/// Name of the compound conversation index on the message collection
pub const CONVERSATION_INDEX: &str = "idx_convertId_createTime";

/// Field holding the conversation key (`"{min_user_id}_{max_user_id}"`)
pub const CONVERT_ID_FIELD: &str = "convert_id";

/// Field holding the message creation time (unix seconds)
pub const CREATE_TIME_FIELD: &str = "create_time";

/// Database the message service stores its collections in
pub const DEFAULT_DATABASE: &str = "douyin";
