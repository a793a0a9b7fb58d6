//! # Admin Mode
//!
//! Single owner of the admin-mode flag. Interested parties register a
//! callback and are called synchronously whenever the flag flips, and once
//! at registration so they start in sync.
//!
//! Admin mode only gates what is shown. It is not a security boundary; the
//! initial value comes from whatever the host says about the current user.

use log::debug;
use std::fmt;

type Subscriber = Box<dyn Fn(bool) + Send>;

pub struct AdminMode {
    enabled: bool,
    subscribers: Vec<Subscriber>,
}

impl AdminMode {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            subscribers: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Registers `callback` and immediately calls it with the current value.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(bool) + Send + 'static,
    {
        callback(self.enabled);
        self.subscribers.push(Box::new(callback));
    }

    /// Sets the flag. Subscribers are only called when the value changes.
    pub fn set(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        debug!(
            "Admin mode {} ({} subscribers)",
            if enabled { "on" } else { "off" },
            self.subscribers.len()
        );
        for subscriber in &self.subscribers {
            subscriber(enabled);
        }
    }

    pub fn toggle(&mut self) {
        self.set(!self.enabled);
    }
}

impl Default for AdminMode {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for AdminMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminMode")
            .field("enabled", &self.enabled)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    #[test]
    fn test_subscribe_receives_current_value() {
        let mut admin = AdminMode::new(true);
        let (seen, callback) = recorder();
        admin.subscribe(callback);
        assert_eq!(*seen.lock().unwrap(), vec![true]);
    }

    #[test]
    fn test_toggle_notifies_synchronously() {
        let mut admin = AdminMode::default();
        let (seen, callback) = recorder();
        admin.subscribe(callback);
        admin.toggle();
        admin.toggle();
        assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
        assert!(!admin.is_enabled());
    }

    #[test]
    fn test_set_same_value_does_not_notify() {
        let mut admin = AdminMode::new(false);
        let (seen, callback) = recorder();
        admin.subscribe(callback);
        admin.set(false);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_every_subscriber_is_called() {
        let mut admin = AdminMode::default();
        let (first, a) = recorder();
        let (second, b) = recorder();
        admin.subscribe(a);
        admin.subscribe(b);
        admin.set(true);
        assert_eq!(first.lock().unwrap().last(), Some(&true));
        assert_eq!(second.lock().unwrap().last(), Some(&true));
    }
}
