//! Pattern 2: Observer
//!
//! A [`Subject`] holds one `i32`. Every call to [`Subject::set_value`] stores
//! the new value and then notifies all attached observers, in attachment
//! order, before returning.
//!
//! Observers receive a [`SubjectView`] rather than the new value, and read
//! the current value from it. The view is a shared borrow, so an observer
//! cannot mutate the subject from inside `update`.

use std::fmt;

use crate::sink::{Sink, Stdout};

/// Read-only access to a subject's state during notification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubjectView {
    value: i32,
}

impl SubjectView {
    pub fn value(&self) -> i32 {
        self.value
    }
}

pub trait Observer {
    fn update(&mut self, subject: &SubjectView, sink: &mut dyn Sink);
}

impl<F> Observer for F
where
    F: FnMut(&SubjectView, &mut dyn Sink),
{
    fn update(&mut self, subject: &SubjectView, sink: &mut dyn Sink) {
        self(subject, sink)
    }
}

// =============================================================================
// Encodings
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Hex,
    Octal,
    Binary,
}

impl Encoding {
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Hex => "Hexa String",
            Encoding::Octal => "Octal String",
            Encoding::Binary => "Binary String",
        }
    }

    /// Negative values come out as 32-bit two's complement.
    pub fn render(self, value: i32) -> String {
        match self {
            Encoding::Hex => format!("{value:X}"),
            Encoding::Octal => format!("{value:o}"),
            Encoding::Binary => format!("{value:b}"),
        }
    }
}

/// Writes `"<label>: <rendering>"` on every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingObserver {
    encoding: Encoding,
}

impl EncodingObserver {
    pub fn new(encoding: Encoding) -> Self {
        EncodingObserver { encoding }
    }

    pub fn hex() -> Self {
        Self::new(Encoding::Hex)
    }

    pub fn octal() -> Self {
        Self::new(Encoding::Octal)
    }

    pub fn binary() -> Self {
        Self::new(Encoding::Binary)
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl Observer for EncodingObserver {
    fn update(&mut self, subject: &SubjectView, sink: &mut dyn Sink) {
        let line = format!(
            "{}: {}",
            self.encoding.label(),
            self.encoding.render(subject.value())
        );
        sink.emit(&line);
    }
}

// =============================================================================
// Subject
// =============================================================================

/// Handle returned by [`Subject::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

pub struct Subject<S = Stdout> {
    view: SubjectView,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u64,
    sink: S,
}

impl Subject<Stdout> {
    pub fn new() -> Self {
        Self::with_sink(Stdout)
    }
}

impl Default for Subject<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sink> Subject<S> {
    pub fn with_sink(sink: S) -> Self {
        Subject {
            view: SubjectView::default(),
            observers: Vec::new(),
            next_id: 0,
            sink,
        }
    }

    pub fn value(&self) -> i32 {
        self.view.value
    }

    /// Appends `observer`; it is notified after every observer attached before it.
    pub fn attach(&mut self, observer: impl Observer + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        tracing::debug!(?id, count = self.observers.len(), "observer attached");
        id
    }

    pub fn attach_fn<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&SubjectView, &mut dyn Sink) + 'static,
    {
        self.attach(observer)
    }

    /// Removes the observer. Unknown or already detached ids give `None`.
    pub fn detach(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        let position = self.observers.iter().position(|(entry, _)| *entry == id)?;
        let (_, observer) = self.observers.remove(position);
        tracing::debug!(?id, count = self.observers.len(), "observer detached");
        Some(observer)
    }

    /// Stores `value` and notifies every observer exactly once.
    pub fn set_value(&mut self, value: i32) {
        self.view.value = value;
        self.notify();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn notify(&mut self) {
        tracing::debug!(value = self.view.value, observers = self.observers.len(), "notifying");
        for (id, observer) in &mut self.observers {
            tracing::trace!(?id, "update");
            observer.update(&self.view, &mut self.sink);
        }
    }
}

impl<S> fmt::Debug for Subject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("value", &self.view.value)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
