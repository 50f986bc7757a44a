//! Sequential playback of a guide's steps for the presentation view.

use crate::dto::guides::{GuideDetailDto, StepDto};

/// Cursor over a guide's ordered steps.
///
/// Movement clamps at both ends; a guide with no steps stays on an empty
/// position and reports zero progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    guide: GuideDetailDto,
    current_index: usize,
}

impl Walkthrough {
    /// Starts at the first step.
    pub fn new(guide: GuideDetailDto) -> Self {
        Self {
            guide,
            current_index: 0,
        }
    }

    pub fn guide(&self) -> &GuideDetailDto {
        &self.guide
    }

    pub fn current_step(&self) -> Option<&StepDto> {
        self.guide.steps.get(self.current_index)
    }

    pub fn total_steps(&self) -> usize {
        self.guide.steps.len()
    }

    /// 1-based position of the current step.
    pub fn position(&self) -> usize {
        self.current_index + 1
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.guide.steps.len()
    }

    /// Moves to the next step; returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous step; returns whether the cursor moved.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Completion percentage shown by the progress bar.
    pub fn progress_percent(&self) -> f32 {
        let total = self.guide.steps.len();
        if total == 0 {
            return 0.0;
        }
        (self.current_index + 1) as f32 / total as f32 * 100.0
    }
}
