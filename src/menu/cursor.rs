use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu has no items")]
    Empty,
    #[error("no item in the menu can be selected")]
    NoSelectableItem,
}

/// One line of a menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<T> {
    pub label: &'static str,
    pub selectable: bool,
    pub payload: T,
}

impl<T> MenuItem<T> {
    pub fn new(label: &'static str, selectable: bool, payload: T) -> Self {
        Self {
            label,
            selectable,
            payload,
        }
    }
}

/// Wrap-around cursor over a list of menu items that skips items that
/// can't be selected
#[derive(Debug, Clone)]
pub struct MenuCursor<T> {
    current: usize,
    items: Vec<MenuItem<T>>,
}

impl<T> MenuCursor<T> {
    /// Cursor on the first item, whether or not it is selectable. Call
    /// `reset` to land on a selectable one.
    pub fn new(items: Vec<MenuItem<T>>) -> Self {
        Self { current: 0, items }
    }

    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Result<&MenuItem<T>, MenuError> {
        self.items.get(self.current).ok_or(MenuError::Empty)
    }

    pub fn set_selectable(&mut self, index: usize, selectable: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.selectable = selectable;
        }
    }

    /// Move one item in the direction of `direction`'s sign, wrapping at
    /// both ends and skipping unselectable items. Zero returns the current
    /// item without checking it.
    ///
    /// The cursor doesn't move when nothing is selectable.
    pub fn advance(&mut self, direction: i32) -> Result<&MenuItem<T>, MenuError> {
        if self.items.is_empty() {
            return Err(MenuError::Empty);
        }
        let step = direction.signum() as isize;
        if step == 0 {
            return Ok(&self.items[self.current]);
        }

        let len = self.items.len() as isize;
        let mut index = self.current as isize;
        for _ in 0..len {
            index = (index + step).rem_euclid(len);
            if self.items[index as usize].selectable {
                self.current = index as usize;
                return Ok(&self.items[self.current]);
            }
        }
        Err(MenuError::NoSelectableItem)
    }

    /// Select the first selectable item from the top
    pub fn reset(&mut self) -> Result<&MenuItem<T>, MenuError> {
        if self.items.is_empty() {
            return Err(MenuError::Empty);
        }
        self.current = self.items.len() - 1;
        self.advance(1)
    }
}
