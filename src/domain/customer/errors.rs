//! Customer Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("客户名称不能为空")]
    EmptyName,

    #[error("客户 ID 不匹配: path={path}, body={body}")]
    IdMismatch { path: String, body: String },
}
