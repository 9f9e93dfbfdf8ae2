use crate::domain::{Member, MemberId, commands::RegisterMember};

use super::errors::{LibraryError, Result};
use super::library::Library;
use super::views::MemberSummary;

impl Library {
    /// 会員を登録する
    ///
    /// # エラー
    /// - IdsExhausted: 会員IDを使い切った
    pub fn register_member(&mut self, cmd: RegisterMember) -> Result<Member> {
        let member_id = self
            .members
            .next_id()
            .ok_or(LibraryError::IdsExhausted("member"))?;
        let member = Member::new(member_id, cmd.name);
        self.members.save(member.clone());

        tracing::info!(member_id = %member.member_id, name = %member.name, "member registered");
        Ok(member)
    }

    pub fn member(&self, member_id: MemberId) -> Result<Member> {
        self.find_member(member_id)
    }

    /// 登録順の会員一覧（各会員の貸出中冊数つき）
    pub fn list_members(&self) -> Vec<MemberSummary> {
        self.members
            .find_all()
            .into_iter()
            .map(|member| {
                let active_loans = self.ledger.find_active_for_member(member.member_id).len();
                MemberSummary {
                    member,
                    active_loans,
                }
            })
            .collect()
    }

    /// 会員を削除する
    ///
    /// ビジネスルール：
    /// - 貸出中の書籍がある会員は削除できない
    pub fn delete_member(&mut self, member_id: MemberId) -> Result<Member> {
        let member = self.find_member(member_id)?;

        let active_loans = self.ledger.find_active_for_member(member_id).len();
        if active_loans > 0 {
            return Err(LibraryError::MemberHasActiveLoans {
                member_id,
                name: member.name,
                active_loans,
            });
        }

        let removed = self
            .members
            .remove(member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))?;

        tracing::info!(member_id = %removed.member_id, name = %removed.name, "member deleted");
        Ok(removed)
    }
}
