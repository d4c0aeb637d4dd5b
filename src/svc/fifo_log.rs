use std::cell::RefCell;
use std::collections::VecDeque;

use crate::svc::{LogEntry, MessageSink};

/// Sink that keeps entries in memory and hands them back oldest first.
#[derive(Default, Debug)]
pub struct FifoLog {
    queue: RefCell<VecDeque<LogEntry>>,
}

impl FifoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_message(&self) -> Option<LogEntry> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Remove every queued entry, returning only their text.
    pub fn drain_texts(&self) -> Vec<String> {
        self.queue
            .borrow_mut()
            .drain(..)
            .map(|entry| entry.text)
            .collect()
    }
}

impl MessageSink for FifoLog {
    fn accept(&self, entry: LogEntry) {
        self.queue.borrow_mut().push_back(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log_has_no_message() {
        let log = FifoLog::new();
        assert!(log.is_empty());
        assert!(log.next_message().is_none());
    }

    #[test]
    fn test_messages_come_back_in_arrival_order() {
        let log = FifoLog::new();
        log.accept(LogEntry::new("first"));
        log.accept(LogEntry::new("second"));
        log.accept(LogEntry::new("third"));
        assert_eq!(log.len(), 3);

        assert_eq!(log.next_message().unwrap().text(), "first");
        assert_eq!(log.drain_texts(), vec!["second", "third"]);
        assert!(log.is_empty());
    }
}
