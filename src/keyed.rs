/// Slot holding at most one task tagged with a key.
///
/// `launch` with a different key drops the running task and starts a new one;
/// launching with the current key leaves the running task untouched.
#[derive(Debug)]
pub struct KeyedTask<K, T> {
    current: Option<(K, T)>,
}

impl<K: PartialEq, T> KeyedTask<K, T> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Returns `true` when a new task was started.
    pub fn launch(&mut self, key: K, start: impl FnOnce() -> T) -> bool {
        if matches!(&self.current, Some((running, _)) if *running == key) {
            return false;
        }
        self.current = Some((key, start()));
        true
    }

    pub fn task(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, task)| task)
    }

    pub fn task_mut(&mut self) -> Option<&mut T> {
        self.current.as_mut().map(|(_, task)| task)
    }
}

impl<K: PartialEq, T> Default for KeyedTask<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_keeps_running_task() {
        let mut slot = KeyedTask::new();
        assert!(slot.launch(1, || 10));
        *slot.task_mut().unwrap() += 5;
        assert!(!slot.launch(1, || 0));
        assert_eq!(slot.task(), Some(&15));
    }

    #[test]
    fn new_key_replaces_task() {
        let mut slot = KeyedTask::new();
        slot.launch("a", || 1);
        assert!(slot.launch("b", || 2));
        assert_eq!(slot.task(), Some(&2));
    }
}
