use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum BannerIntent {
    /// Widget appeared. Starts on the first slide.
    Mount { slide_count: usize, generation: u64 },
    Unmount,
    /// Rotation timer fired. Tagged with the mount generation that started it.
    Tick { generation: u64 },
    Next,
    Previous,
    /// Indicator click. Out-of-range indices leave the state unchanged.
    JumpTo { index: usize },
}

impl Intent for BannerIntent {}
