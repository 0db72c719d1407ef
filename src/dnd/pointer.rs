use super::{MoveIntent, ReorderSource};
use crate::config::Config;

/// Pointer position in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Raw pointer input over a rendered list
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent<K> {
    /// Primary button pressed on the row keyed `key`
    Down { key: K, position: Point },
    /// Pointer moved; `over` is the row under the pointer, if any
    Move { position: Point, over: Option<K> },
    /// Button released; `over` is the row under the pointer, if any
    Up { over: Option<K> },
    /// Gesture aborted by the host (focus lost, escape, ...)
    Cancel,
}

#[derive(Debug, Clone)]
enum State<K> {
    Idle,
    /// Pressed but not yet moved far enough to count as a drag
    Pending { key: K, origin: Point },
    Dragging { key: K, over: Option<K> },
}

/// Turns press / move / release sequences into [`MoveIntent::Onto`].
///
/// A press only becomes a drag once the pointer has travelled further than the
/// activation distance, so plain clicks on a row never reorder it.
#[derive(Debug, Clone)]
pub struct PointerSensor<K> {
    activation_distance: f64,
    state: State<K>,
}

impl<K: Clone + PartialEq> PointerSensor<K> {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance,
            state: State::Idle,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.drag_activation_distance)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Row the dragged item is currently hovering, if any
    pub fn over(&self) -> Option<&K> {
        match &self.state {
            State::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    fn exceeds_activation(&self, origin: Point, position: Point) -> bool {
        let dx = (position.x - origin.x).abs();
        let dy = (position.y - origin.y).abs();
        dx > self.activation_distance || dy > self.activation_distance
    }
}

impl<K: Clone + PartialEq> Default for PointerSensor<K> {
    fn default() -> Self {
        Self::new(Config::DEFAULT_DRAG_ACTIVATION_DISTANCE)
    }
}

impl<K: Clone + PartialEq> ReorderSource<K> for PointerSensor<K> {
    type Event = PointerEvent<K>;

    fn handle(&mut self, event: PointerEvent<K>) -> Option<MoveIntent<K>> {
        match event {
            PointerEvent::Down { key, position } => {
                self.state = State::Pending {
                    key,
                    origin: position,
                };
                None
            }
            PointerEvent::Move { position, over } => {
                let next = match &self.state {
                    State::Pending { key, origin } if self.exceeds_activation(*origin, position) => {
                        Some(State::Dragging {
                            key: key.clone(),
                            over: over.filter(|o| o != key),
                        })
                    }
                    State::Dragging { key, .. } => Some(State::Dragging {
                        key: key.clone(),
                        over: over.filter(|o| o != key),
                    }),
                    _ => None,
                };
                if let Some(next) = next {
                    self.state = next;
                }
                None
            }
            PointerEvent::Up { over } => {
                let state = std::mem::replace(&mut self.state, State::Idle);
                match state {
                    State::Dragging { key, over: hovered } => {
                        let target = over.or(hovered)?;
                        if target == key {
                            return None;
                        }
                        Some(MoveIntent::Onto {
                            active: key,
                            over: target,
                        })
                    }
                    _ => None,
                }
            }
            PointerEvent::Cancel => {
                self.reset();
                None
            }
        }
    }

    fn active(&self) -> Option<&K> {
        match &self.state {
            State::Dragging { key, .. } => Some(key),
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.state = State::Idle;
    }
}
