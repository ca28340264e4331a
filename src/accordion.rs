use std::rc::Rc;
use yew::prelude::*;

/// Expanded flags for one FAQ group. At most one item is open after any activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Vec<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    Activate(usize),
}

impl AccordionState {
    /// Seeds the group from the flags the markup starts with.
    pub fn new(initial: Vec<bool>) -> Self {
        Self { expanded: initial }
    }

    pub fn collapsed(len: usize) -> Self {
        Self::new(vec![false; len])
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.iter().filter(|open| **open).count()
    }

    /// Toggles `index` and collapses every other item. Unknown indices are ignored.
    pub fn activate(&self, index: usize) -> Option<Self> {
        let was_open = *self.expanded.get(index)?;
        let expanded = (0..self.expanded.len())
            .map(|i| i == index && !was_open)
            .collect();
        Some(Self { expanded })
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Activate(index) => match self.activate(index) {
                Some(next) => Rc::new(next),
                None => self,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activate(state: AccordionState, index: usize) -> AccordionState {
        (*Rc::new(state).reduce(AccordionAction::Activate(index))).clone()
    }

    #[test]
    fn opening_one_item() {
        let state = activate(AccordionState::collapsed(3), 1);
        assert!(state.is_expanded(1));
        assert_eq!(state.expanded_count(), 1);
    }

    #[test]
    fn opening_another_closes_the_first() {
        let state = activate(AccordionState::collapsed(3), 0);
        let state = activate(state, 2);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(2));
        assert_eq!(state.expanded_count(), 1);
    }

    #[test]
    fn activating_open_item_collapses_it() {
        let state = activate(AccordionState::collapsed(2), 1);
        let state = activate(state, 1);
        assert_eq!(state.expanded_count(), 0);
    }

    #[test]
    fn initial_markup_with_several_open_is_normalized_on_activation() {
        let state = activate(AccordionState::new(vec![true, true, false]), 2);
        assert_eq!(state, AccordionState::new(vec![false, false, true]));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let state = Rc::new(AccordionState::new(vec![true, false]));
        let next = state.clone().reduce(AccordionAction::Activate(5));
        assert!(Rc::ptr_eq(&state, &next));
        assert!(!AccordionState::collapsed(0).is_expanded(0));
    }
}
