use std::fmt::Debug;

/// Items that carry a stable identity used as their reorder key
pub trait Keyed {
    type Key: Clone + PartialEq + Debug;

    fn key(&self) -> &Self::Key;
}

/// Relocates the element at `from` to `to`, shifting the elements between
/// them by one slot towards the gap.
///
/// Returns `false` without touching the slice when `from == to` or either
/// index is out of bounds.
///
/// # Examples
/// ```
/// use sortlist_core::domain::list::move_item;
///
/// let mut items = vec!["a", "b", "c", "d"];
/// assert!(move_item(&mut items, 0, 2));
/// assert_eq!(items, ["b", "c", "a", "d"]);
/// ```
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }

    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Non-mutating form of [`move_item`]
pub fn moved<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = items.to_vec();
    move_item(&mut result, from, to);
    result
}

/// Ordered collection of keyed items. No two items share a key.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<T: Keyed> {
    items: Vec<T>,
}

impl<T: Keyed> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> ListStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a store from `items`, dropping any item whose key was already seen
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut store = Self::new();
        for item in items {
            if !store.push(item) {
                tracing::warn!("dropped item with duplicate key");
            }
        }
        store
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current index of the item with `key`
    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Applies `f` to the item with `key`. Returns `false` if there is none.
    pub fn update(&mut self, key: &T::Key, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Appends `item` unless its key is already present
    pub fn push(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the item with `key`
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let index = self.position(key)?;
        Some(self.items.remove(index))
    }

    /// Keeps only the items matching `keep`, returning how many were removed
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        before - self.items.len()
    }

    /// Replaces the whole sequence, with the same duplicate handling as [`ListStore::from_items`]
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = T>) {
        *self = Self::from_items(items);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// See [`move_item`]
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        move_item(&mut self.items, from, to)
    }

    /// Moves the item keyed `active` to the slot currently held by `over`.
    ///
    /// Both positions are looked up at call time.
    pub fn move_by_key(&mut self, active: &T::Key, over: &T::Key) -> bool {
        if active == over {
            return false;
        }
        match (self.position(active), self.position(over)) {
            (Some(from), Some(to)) => self.move_item(from, to),
            _ => false,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T: Keyed> IntoIterator for &'a ListStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
