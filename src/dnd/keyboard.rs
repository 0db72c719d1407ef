use super::{Direction, MoveIntent, ReorderSource};

/// Discrete keyboard reorder commands
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand<K> {
    /// Pick up the focused row
    Grab(K),
    MoveUp,
    MoveDown,
    /// Put the grabbed row down where it is
    Drop,
    Cancel,
}

/// Keyboard alternative to the pointer sensor.
///
/// Each move-up / move-down while an item is grabbed yields one
/// [`MoveIntent::Step`]. Commands with nothing grabbed are ignored.
#[derive(Debug, Clone)]
pub struct KeyboardSensor<K> {
    grabbed: Option<K>,
}

impl<K: Clone> KeyboardSensor<K> {
    pub fn new() -> Self {
        Self { grabbed: None }
    }

    fn step(&self, direction: Direction) -> Option<MoveIntent<K>> {
        self.grabbed.clone().map(|active| MoveIntent::Step { active, direction })
    }
}

impl<K: Clone> Default for KeyboardSensor<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> ReorderSource<K> for KeyboardSensor<K> {
    type Event = KeyCommand<K>;

    fn handle(&mut self, command: KeyCommand<K>) -> Option<MoveIntent<K>> {
        match command {
            KeyCommand::Grab(key) => {
                self.grabbed = Some(key);
                None
            }
            KeyCommand::MoveUp => self.step(Direction::Up),
            KeyCommand::MoveDown => self.step(Direction::Down),
            KeyCommand::Drop | KeyCommand::Cancel => {
                self.reset();
                None
            }
        }
    }

    fn active(&self) -> Option<&K> {
        self.grabbed.as_ref()
    }

    fn reset(&mut self) {
        self.grabbed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grab_and_step() {
        let mut sensor = KeyboardSensor::new();

        assert!(sensor.handle(KeyCommand::Grab("b")).is_none());
        assert_eq!(sensor.active(), Some(&"b"));

        assert_eq!(
            sensor.handle(KeyCommand::MoveUp),
            Some(MoveIntent::Step {
                active: "b",
                direction: Direction::Up
            })
        );
        assert_eq!(
            sensor.handle(KeyCommand::MoveDown),
            Some(MoveIntent::Step {
                active: "b",
                direction: Direction::Down
            })
        );
    }

    #[test]
    fn test_commands_without_grab_are_ignored() {
        let mut sensor: KeyboardSensor<&str> = KeyboardSensor::new();
        assert!(sensor.handle(KeyCommand::MoveUp).is_none());
        assert!(sensor.handle(KeyCommand::MoveDown).is_none());
        assert!(sensor.handle(KeyCommand::Drop).is_none());
    }

    #[test]
    fn test_drop_and_cancel_release() {
        let mut sensor = KeyboardSensor::new();

        sensor.handle(KeyCommand::Grab(1));
        sensor.handle(KeyCommand::Drop);
        assert!(sensor.active().is_none());
        assert!(sensor.handle(KeyCommand::MoveDown).is_none());

        sensor.handle(KeyCommand::Grab(2));
        sensor.handle(KeyCommand::Cancel);
        assert!(sensor.active().is_none());
    }
}
