use crate::domain::AccessionRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Mutex;

/// 貸出可能な登録番号から1冊を選ぶ方針
///
/// 候補が空なら `None`。候補以外を返してはならない。
pub trait CopySelector: Send + Sync {
    fn select(&self, candidates: &[AccessionRecord]) -> Option<AccessionRecord>;
}

/// 先頭の候補を選ぶ
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl CopySelector for FirstAvailable {
    fn select(&self, candidates: &[AccessionRecord]) -> Option<AccessionRecord> {
        candidates.first().cloned()
    }
}

/// 乱数で候補を選ぶ
///
/// シードを指定すると選択順が再現できる。
pub struct RandomAvailable {
    rng: Mutex<StdRng>,
}

impl RandomAvailable {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CopySelector for RandomAvailable {
    fn select(&self, candidates: &[AccessionRecord]) -> Option<AccessionRecord> {
        // 乱数状態は選択の途中で壊れないため、poisonされても使い続ける
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        candidates.choose(&mut *rng).cloned()
    }
}
