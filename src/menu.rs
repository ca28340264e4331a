use std::rc::Rc;
use yew::prelude::*;

/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    SetOpen(bool),
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::SetOpen(open) => open,
        };
        if open == self.open {
            return self;
        }
        Rc::new(MenuState { open })
    }
}

impl MenuState {
    /// Value of `data-open` on the panel.
    pub fn data_open(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// `aria-expanded` on the trigger, always equal to `data_open`.
    pub fn aria_expanded(&self) -> &'static str {
        self.data_open()
    }

    pub fn aria_label(&self) -> &'static str {
        if self.open { "Fechar menu" } else { "Abrir menu" }
    }

    /// Whether page scrolling behind the panel is locked.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}

/// Maps a document keydown to a menu action.
pub fn action_for_key(key: &str) -> Option<MenuAction> {
    match key {
        "Escape" => Some(MenuAction::SetOpen(false)),
        _ => None,
    }
}
