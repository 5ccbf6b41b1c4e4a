//! カードのフェードイン表示
//!
//! 要素ごとに「表示済み」フラグを持ち、false→true へは一度だけ遷移する。

/// 要素インデックスに応じたtransition指定
pub fn reveal_transition(index: usize, stagger_ms: u32) -> String {
    let delay = index as u64 * u64::from(stagger_ms);
    format!(
        "opacity 0.5s ease {delay}ms, transform 0.5s ease {delay}ms",
        delay = delay
    )
}

/// ブラウザが丸めた交差率を閾値ちょうどとみなす幅
const RATIO_TOLERANCE: f64 = 1e-3;

/// 交差イベントが表示条件（閾値以上見えている）を満たすか
///
/// 初回コールバックは閾値未満でも intersecting=true で来ることがある。
pub fn meets_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio + RATIO_TOLERANCE >= threshold
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// 交差イベントを受け取る
    ///
    /// 初めて見えたときだけ true を返す。範囲外のインデックスは無視。
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
