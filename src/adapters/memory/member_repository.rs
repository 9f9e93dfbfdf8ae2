use crate::domain::{Member, MemberId};
use crate::ports::member_repository::MemberRepository as MemberRepositoryTrait;

/// インメモリ MemberRepository
///
/// ID採番は名簿とは別に保持するため、会員を削除してもIDは空かない。
#[derive(Debug, Default)]
pub struct MemberRepository {
    members: Vec<Member>,
    last_id: Option<MemberId>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemberRepositoryTrait for MemberRepository {
    fn next_id(&mut self) -> Option<MemberId> {
        let id = match self.last_id {
            Some(last) => last.next()?,
            None => MemberId::new(1),
        };
        self.last_id = Some(id);
        Some(id)
    }

    fn save(&mut self, member: Member) {
        match self
            .members
            .iter_mut()
            .find(|m| m.member_id == member.member_id)
        {
            Some(existing) => *existing = member,
            None => self.members.push(member),
        }
    }

    fn get_by_id(&self, member_id: MemberId) -> Option<Member> {
        self.members
            .iter()
            .find(|m| m.member_id == member_id)
            .cloned()
    }

    fn find_all(&self) -> Vec<Member> {
        self.members.clone()
    }

    fn remove(&mut self, member_id: MemberId) -> Option<Member> {
        let index = self
            .members
            .iter()
            .position(|m| m.member_id == member_id)?;
        Some(self.members.remove(index))
    }

    fn count(&self) -> usize {
        self.members.len()
    }
}
