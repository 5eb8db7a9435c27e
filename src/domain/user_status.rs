use std::{fmt, str::FromStr};

use crate::error::UnknownStatus;

/// 账户状态，每个状态对应固定的显示名称与授权范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserStatus {
    PendingApproval,
    Approved,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::PendingApproval, UserStatus::Approved];

    pub fn parse(s: &str) -> Result<UserStatus, UnknownStatus> {
        match s {
            "PENDING_APPROVAL" => Ok(Self::PendingApproval),
            "APPROVED" => Ok(Self::Approved),
            _ => {
                tracing::warn!("`{s}` is not a known user status.");
                Err(UnknownStatus(s.into()))
            }
        }
    }

    /// 持久化名称
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::PendingApproval => "PENDING_APPROVAL",
            UserStatus::Approved => "APPROVED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::PendingApproval => "Pending Approval",
            UserStatus::Approved => "Approved",
        }
    }

    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            UserStatus::PendingApproval => &["selfservice.read", "selfservice.write"],
            UserStatus::Approved => &["fullaccess"],
        }
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes().contains(&scope)
    }
}

impl AsRef<str> for UserStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UserStatus {
    type Error = UnknownStatus;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserStatus {
    type Error = UnknownStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        status.as_str().into()
    }
}
