use crate::domain::{Member, MemberId};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::POISONED;

/// In-memory implementation of MemberRepository
pub struct MemberRepository {
    members: Mutex<HashMap<MemberId, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn save(&self, member: Member) -> Result<()> {
        self.members
            .lock()
            .map_err(|_| POISONED)?
            .insert(member.member_id, member);
        Ok(())
    }

    async fn get_by_id(&self, id: MemberId) -> Result<Option<Member>> {
        Ok(self.members.lock().map_err(|_| POISONED)?.get(&id).cloned())
    }
}
