//! Data Transfer Objects

use serde::{Deserialize, Serialize};

/// 写操作成功响应: `{"success": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(success: T) -> Self {
        Self { success }
    }
}
