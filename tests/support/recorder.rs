use bomcheck::report::Reporter;
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Info,
    Warn,
    Error,
    Unused,
}

/// Reporter that keeps every event for later assertions.
#[derive(Default)]
pub struct Recorder {
    events: RefCell<Vec<(Level, String)>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn push(&self, level: Level, msg: &str) {
        self.events.borrow_mut().push((level, msg.to_string()));
    }
}

impl Reporter for Recorder {
    fn log(&self, msg: &str) {
        self.push(Level::Log, msg);
    }

    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }

    fn unused(&self, ids: &[String]) {
        for id in ids {
            self.push(Level::Unused, id);
        }
    }
}
