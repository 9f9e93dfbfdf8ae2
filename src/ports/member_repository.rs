use crate::domain::{Member, MemberId};

/// 会員名簿ポート
pub trait MemberRepository {
    /// 次の会員IDを採番する
    ///
    /// 退会後もIDは再利用しない。ID空間を使い切った場合は`None`
    fn next_id(&mut self) -> Option<MemberId>;

    fn save(&mut self, member: Member);

    fn get_by_id(&self, member_id: MemberId) -> Option<Member>;

    /// 登録順の全会員
    fn find_all(&self) -> Vec<Member>;

    /// 名簿から削除し、存在していればその会員を返す
    fn remove(&mut self, member_id: MemberId) -> Option<Member>;

    fn count(&self) -> usize;
}
