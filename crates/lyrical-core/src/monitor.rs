//! Push style reports to interested observers as the text changes.

use crate::function_words::FunctionWordSet;
use crate::metrics::StyleEngine;
use crate::types::StyleReport;

/// Handle returned by [`StyleMonitor::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener<'a> = Box<dyn FnMut(&StyleReport) + 'a>;

/// Recomputes a [`StyleReport`] on every update and hands it to each
/// registered listener. Blank text notifies nobody.
pub struct StyleMonitor<'a> {
    engine: StyleEngine<'a>,
    listeners: Vec<(SubscriptionId, Listener<'a>)>,
    next_id: usize,
    last: Option<StyleReport>,
}

impl<'a> StyleMonitor<'a> {
    pub fn new(words: &'a FunctionWordSet) -> Self {
        Self {
            engine: StyleEngine::new(words),
            listeners: Vec::new(),
            next_id: 0,
            last: None,
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StyleReport) + 'a) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Analyze `text` and notify listeners. Returns the new report, or
    /// `None` when the text has no words.
    pub fn update(&mut self, text: &str) -> Option<&StyleReport> {
        let report = self.engine.analyze(text)?;
        for (_, listener) in &mut self.listeners {
            listener(&report);
        }
        self.last = Some(report);
        self.last.as_ref()
    }

    /// The most recent report produced by [`update`](Self::update).
    pub fn last(&self) -> Option<&StyleReport> {
        self.last.as_ref()
    }
}
