//! Wizard Step Controller
//!
//! Linear step counter shared by the setup and edit wizards. Forward moves
//! are gated by the caller's validity check; the terminal action is gated by
//! a loading flag so an in-flight save cannot be submitted twice.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    current: usize,
    total: usize,
    loading: bool,
}

impl StepController {
    /// Start on step 1 of `total` (at least one step)
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
            loading: false,
        }
    }

    /// Current step, 1-based
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Advance when `valid` and not on the last step. Returns whether the
    /// step changed. Navigation is frozen while a submit is in flight.
    pub fn next(&mut self, valid: bool) -> bool {
        if !valid || self.loading || self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Step back. Returns `false` on step 1, which callers treat as
    /// "leave the wizard".
    pub fn prev(&mut self) -> bool {
        if self.loading || self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to a step already reachable without skipping validation
    pub fn go_to(&mut self, step: usize) -> bool {
        if self.loading || step == 0 || step > self.total {
            return false;
        }
        self.current = step;
        true
    }

    /// Mark a submit as in flight. Returns `false` when one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Clear the in-flight flag once the simulated operation returns
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_step() {
        let wizard = StepController::new(3);
        assert_eq!(wizard.current(), 1);
        assert_eq!(wizard.total(), 3);
        assert!(wizard.is_first());
        assert!(!wizard.is_last());
        assert!(!wizard.is_loading());
    }

    #[test]
    fn test_zero_steps_clamped() {
        let wizard = StepController::new(0);
        assert_eq!(wizard.total(), 1);
        assert!(wizard.is_last());
    }

    #[test]
    fn test_next_rejected_when_invalid() {
        let mut wizard = StepController::new(3);
        assert!(!wizard.next(false));
        assert_eq!(wizard.current(), 1);
    }

    #[test]
    fn test_next_and_prev() {
        let mut wizard = StepController::new(3);
        assert!(wizard.next(true));
        assert!(wizard.next(true));
        assert!(wizard.is_last());
        assert!(!wizard.next(true));
        assert_eq!(wizard.current(), 3);

        assert!(wizard.prev());
        assert!(wizard.prev());
        assert!(!wizard.prev());
        assert_eq!(wizard.current(), 1);
    }

    #[test]
    fn test_begin_submit_blocks_resubmission() {
        let mut wizard = StepController::new(3);
        assert!(wizard.begin_submit());
        assert!(!wizard.begin_submit());
        assert!(wizard.is_loading());

        wizard.finish_submit();
        assert!(!wizard.is_loading());
        assert!(wizard.begin_submit());
    }

    #[test]
    fn test_navigation_frozen_while_loading() {
        let mut wizard = StepController::new(3);
        wizard.next(true);
        wizard.begin_submit();
        assert!(!wizard.next(true));
        assert!(!wizard.prev());
        assert!(!wizard.go_to(1));
        assert_eq!(wizard.current(), 2);
    }

    #[test]
    fn test_go_to_bounds() {
        let mut wizard = StepController::new(3);
        assert!(!wizard.go_to(0));
        assert!(!wizard.go_to(4));
        assert!(wizard.go_to(3));
        assert_eq!(wizard.current(), 3);
    }
}
