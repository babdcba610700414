//! Keyboard bindings for the widget's interactive elements.

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Same as a pointer activation of the focused element.
    Activate,
    /// Close the share popup from anywhere on the page.
    ClosePopup,
}

/// A key binding definition.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// `KeyboardEvent.key` value.
    pub key: &'static str,
    /// Label for display.
    pub label: &'static str,
    pub action: KeyAction,
    pub description: &'static str,
}

impl KeyBinding {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        action: KeyAction,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            action,
            description,
        }
    }
}

/// `KeyboardEvent.key` for the Escape key.
pub const ESCAPE: &str = "Escape";

static BINDINGS: [KeyBinding; 3] = [
    KeyBinding::new(
        "Enter",
        "Enter",
        KeyAction::Activate,
        "Activate the focused control",
    ),
    KeyBinding::new(" ", "Space", KeyAction::Activate, "Activate the focused control"),
    KeyBinding::new(ESCAPE, "Escape", KeyAction::ClosePopup, "Close the share popup"),
];

/// Registry of all key bindings.
pub struct KeyBindings;

impl KeyBindings {
    pub fn all() -> &'static [KeyBinding] {
        &BINDINGS
    }

    /// Find the action bound to a `KeyboardEvent.key` value.
    pub fn action_for(key: &str) -> Option<KeyAction> {
        BINDINGS.iter().find(|b| b.key == key).map(|b| b.action)
    }

    /// Format all bindings, one per line.
    pub fn describe() -> String {
        BINDINGS
            .iter()
            .map(|b| format!("  {:10} {}", b.label, b.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Whether `key` activates an element like a pointer click does.
pub fn is_activation_key(key: &str) -> bool {
    KeyBindings::action_for(key) == Some(KeyAction::Activate)
}
