use super::MemberId;

/// 会員 - 登録済みの利用者
///
/// 貸出中の記録はここに持たず、貸出台帳から導出する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
}

impl Member {
    pub fn new(member_id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member_id,
            name: name.into(),
        }
    }
}
