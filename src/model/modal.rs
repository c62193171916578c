//! Modal stack for managing overlays

/// A modal overlay drawn on top of the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Close `modal` if it is on top, open it otherwise
    pub fn toggle(&mut self, modal: Modal) {
        if self.top() == Some(&modal) {
            self.stack.pop();
        } else {
            self.stack.push(modal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.is_empty());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut stack = ModalStack::new();
        stack.toggle(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));

        stack.toggle(Modal::Help);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_toggle_stacks_over_different_modal() {
        let mut stack = ModalStack::new();
        stack.push(Modal::QuitConfirm);
        stack.toggle(Modal::Help);

        assert_eq!(stack.top(), Some(&Modal::Help));
        stack.toggle(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));
    }
}
