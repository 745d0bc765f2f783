/// Keys that can drive navigation. The binding layer translates raw window
/// events into these; everything it cannot translate is unmapped and must be
/// left to the default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Space,
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    First,
    Last,
    Next,
    Prev,
}

/// Suppression inputs, sampled from the windowing layer at event time.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyContext {
    /// Keyboard focus is on a widget that accepts text entry.
    pub editable_focus: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyContext {
    pub fn suppressed(&self) -> bool {
        self.editable_focus || self.alt || self.ctrl || self.shift || self.meta
    }
}

/// Map a key-down to a navigation command. The suppression rule
/// short-circuits before any mapping; a suppressed event maps to `None` and
/// must not have its default action prevented.
pub fn dispatch(key: NavKey, ctx: KeyContext) -> Option<KeyCommand> {
    if ctx.suppressed() {
        return None;
    }
    Some(command_for(key))
}

fn command_for(key: NavKey) -> KeyCommand {
    match key {
        NavKey::Home => KeyCommand::First,
        NavKey::End => KeyCommand::Last,
        NavKey::Right | NavKey::Space | NavKey::PageDown | NavKey::Down => KeyCommand::Next,
        NavKey::Left | NavKey::Backspace | NavKey::PageUp | NavKey::Up => KeyCommand::Prev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_key_table() {
        let ctx = KeyContext::default();
        assert_eq!(dispatch(NavKey::Home, ctx), Some(KeyCommand::First));
        assert_eq!(dispatch(NavKey::End, ctx), Some(KeyCommand::Last));
        for key in [NavKey::Right, NavKey::Space, NavKey::PageDown, NavKey::Down] {
            assert_eq!(dispatch(key, ctx), Some(KeyCommand::Next));
        }
        for key in [NavKey::Left, NavKey::Backspace, NavKey::PageUp, NavKey::Up] {
            assert_eq!(dispatch(key, ctx), Some(KeyCommand::Prev));
        }
    }

    #[test]
    fn test_editable_focus_suppresses() {
        let ctx = KeyContext {
            editable_focus: true,
            ..Default::default()
        };
        assert_eq!(dispatch(NavKey::Right, ctx), None);
        assert_eq!(dispatch(NavKey::Backspace, ctx), None);
        assert_eq!(dispatch(NavKey::Home, ctx), None);
    }

    #[test]
    fn test_each_modifier_suppresses() {
        for modifier in 0..4 {
            let ctx = KeyContext {
                alt: modifier == 0,
                ctrl: modifier == 1,
                shift: modifier == 2,
                meta: modifier == 3,
                ..Default::default()
            };
            assert!(ctx.suppressed());
            assert_eq!(dispatch(NavKey::Space, ctx), None);
        }
    }

    #[test]
    fn test_plain_context_not_suppressed() {
        assert!(!KeyContext::default().suppressed());
    }
}
