//! Drag-and-drop reordering
//!
//! Input sensors translate gestures into [`MoveIntent`]s. Intents name items by
//! key, never by index, and are resolved against the list only when applied.

use crate::domain::list::{Keyed, ListStore};

pub mod keyboard;
pub mod pointer;

pub use keyboard::{KeyCommand, KeyboardSensor};
pub use pointer::{Point, PointerEvent, PointerSensor};

/// Direction of a single-step keyboard move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A requested reorder, expressed in item keys
#[derive(Debug, Clone, PartialEq)]
pub enum MoveIntent<K> {
    /// Drop `active` onto the slot held by `over`
    Onto { active: K, over: K },
    /// Shift `active` one slot in `direction`
    Step { active: K, direction: Direction },
}

/// A source of reorder gestures
pub trait ReorderSource<K> {
    type Event;

    /// Feeds one input event, returning an intent when a gesture completes
    fn handle(&mut self, event: Self::Event) -> Option<MoveIntent<K>>;

    /// Key of the item currently being dragged, if any
    fn active(&self) -> Option<&K>;

    /// Drops any in-flight gesture
    fn reset(&mut self);
}

/// Resolves `intent` against the current contents of `store` and performs the move.
///
/// Returns `false` when the intent resolves to a no-op: dropping an item on
/// itself, stepping past either end, or naming a key that is no longer present.
pub fn apply_intent<T: Keyed>(store: &mut ListStore<T>, intent: &MoveIntent<T::Key>) -> bool {
    match intent {
        MoveIntent::Onto { active, over } => store.move_by_key(active, over),
        MoveIntent::Step { active, direction } => {
            let Some(from) = store.position(active) else {
                return false;
            };
            let to = match direction {
                Direction::Up => match from.checked_sub(1) {
                    Some(to) => to,
                    None => return false,
                },
                Direction::Down => from + 1,
            };
            store.move_item(from, to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::{EntryKey, EntryKeyAllocator, ImageEntry};

    fn store(urls: &[&str]) -> (ListStore<ImageEntry>, Vec<EntryKey>) {
        let entries = EntryKeyAllocator::new().entries(urls.iter().copied());
        let keys = entries.iter().map(|e| e.key).collect();
        (ListStore::from_items(entries), keys)
    }

    fn urls(store: &ListStore<ImageEntry>) -> Vec<&str> {
        store.iter().map(|e| e.url.as_str()).collect()
    }

    #[test]
    fn test_apply_onto() {
        let (mut list, keys) = store(&["a", "b", "c"]);
        let intent = MoveIntent::Onto {
            active: keys[2],
            over: keys[0],
        };
        assert!(apply_intent(&mut list, &intent));
        assert_eq!(urls(&list), ["c", "a", "b"]);
    }

    #[test]
    fn test_apply_onto_self_is_noop() {
        let (mut list, keys) = store(&["a", "b"]);
        let intent = MoveIntent::Onto {
            active: keys[1],
            over: keys[1],
        };
        assert!(!apply_intent(&mut list, &intent));
        assert_eq!(urls(&list), ["a", "b"]);
    }

    #[test]
    fn test_apply_uses_identity_with_duplicate_urls() {
        let (mut list, keys) = store(&["dup", "x", "dup"]);
        let intent = MoveIntent::Onto {
            active: keys[2],
            over: keys[1],
        };
        assert!(apply_intent(&mut list, &intent));
        assert_eq!(list.items()[1].key, keys[2]);
        assert_eq!(list.items()[2].key, keys[1]);
    }

    #[test]
    fn test_apply_after_list_changed() {
        let (mut list, keys) = store(&["a", "b", "c", "d"]);
        list.remove(&keys[0]);

        // "d" is now at index 2, "b" at index 0
        let intent = MoveIntent::Onto {
            active: keys[3],
            over: keys[1],
        };
        assert!(apply_intent(&mut list, &intent));
        assert_eq!(urls(&list), ["d", "b", "c"]);

        let stale = MoveIntent::Onto {
            active: keys[0],
            over: keys[1],
        };
        assert!(!apply_intent(&mut list, &stale));
    }

    #[test]
    fn test_apply_step_bounds() {
        let (mut list, keys) = store(&["a", "b", "c"]);

        let up_first = MoveIntent::Step {
            active: keys[0],
            direction: Direction::Up,
        };
        assert!(!apply_intent(&mut list, &up_first));

        let down_last = MoveIntent::Step {
            active: keys[2],
            direction: Direction::Down,
        };
        assert!(!apply_intent(&mut list, &down_last));

        let down_first = MoveIntent::Step {
            active: keys[0],
            direction: Direction::Down,
        };
        assert!(apply_intent(&mut list, &down_first));
        assert_eq!(urls(&list), ["b", "a", "c"]);
    }
}
