use serde::{Deserialize, Serialize};
use validator::Validate;

/// One `(id, order_index)` pair of a bulk reorder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: i32,
    pub order_index: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReorderPayload {
    #[validate(length(min = 1, message = "items is required"))]
    pub items: Vec<ReorderItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub id: i32,
    pub deleted: bool,
}
