//! Share popup visibility.

/// Visibility of the share popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    /// Popup hidden, trigger reports `aria-expanded="false"`.
    #[default]
    Closed,
    /// Popup shown, trigger reports `aria-expanded="true"`.
    Open,
}

impl PopupState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The state a trigger activation moves to.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Value for the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(PopupState::default(), PopupState::Closed);
        assert_eq!(PopupState::default().aria_expanded(), "false");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let state = PopupState::Closed;
        assert_eq!(state.toggled(), PopupState::Open);
        assert_eq!(state.toggled().toggled(), state);
        assert_eq!(state.toggled().aria_expanded(), "true");
    }
}
