use std::fmt::Debug;

use crate::util::error_chain_fmt;

/// 不在已知状态集合内的名称
#[derive(thiserror::Error, Clone, PartialEq, Eq)]
#[error("`{0}` is not a known user status.")]
pub struct UnknownStatus(pub String);

impl Debug for UnknownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
