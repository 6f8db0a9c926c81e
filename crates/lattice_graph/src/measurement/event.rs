//! EventMeasurement - callbacks registered per cluster event kind.

use std::collections::HashMap;
use std::fmt;

use super::{Measurement, SweepState};
use crate::graph::VertexId;

/// Kind of cluster event a listener subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClusterEventKind {
  PreCluster,
  PostCluster,
}

/// Payload handed to listeners.
#[derive(Debug)]
pub enum ClusterEvent<'a, G: ?Sized, X, R> {
  PreCluster {
    state: &'a SweepState<'a, G, X>,
    seed: VertexId,
    transform: &'a R,
  },
  PostCluster {
    state: &'a SweepState<'a, G, X>,
  },
}

impl<G: ?Sized, X, R> ClusterEvent<'_, G, X, R> {
  pub fn kind(&self) -> ClusterEventKind {
    match self {
      ClusterEvent::PreCluster { .. } => ClusterEventKind::PreCluster,
      ClusterEvent::PostCluster { .. } => ClusterEventKind::PostCluster,
    }
  }

  pub fn state(&self) -> &SweepState<'_, G, X> {
    match self {
      ClusterEvent::PreCluster { state, .. } | ClusterEvent::PostCluster { state } => *state,
    }
  }
}

/// Measurement that forwards every hook to registered closures.
///
/// Listeners for one kind run synchronously in registration order.
pub struct EventMeasurement<G: ?Sized, X, R> {
  #[allow(clippy::type_complexity)]
  listeners: HashMap<ClusterEventKind, Vec<Box<dyn for<'e> FnMut(&'e ClusterEvent<'e, G, X, R>)>>>,
}

impl<G: ?Sized, X, R> EventMeasurement<G, X, R> {
  pub fn new() -> Self {
    Self {
      listeners: HashMap::new(),
    }
  }

  /// Register a raw listener for `kind`.
  pub fn add_listener<F>(&mut self, kind: ClusterEventKind, listener: F)
  where
    F: FnMut(&ClusterEvent<'_, G, X, R>) + 'static,
  {
    self
      .listeners
      .entry(kind)
      .or_default()
      .push(Box::new(listener));
  }

  /// Register a listener called before each cluster.
  pub fn on_pre_cluster<F>(&mut self, mut listener: F)
  where
    F: FnMut(&SweepState<'_, G, X>, VertexId, &R) + 'static,
  {
    self.add_listener(ClusterEventKind::PreCluster, move |event| {
      if let ClusterEvent::PreCluster {
        state,
        seed,
        transform,
      } = event
      {
        listener(*state, *seed, *transform);
      }
    });
  }

  /// Register a listener called after each cluster.
  pub fn on_post_cluster<F>(&mut self, mut listener: F)
  where
    F: FnMut(&SweepState<'_, G, X>) + 'static,
  {
    self.add_listener(ClusterEventKind::PostCluster, move |event| {
      listener(event.state());
    });
  }

  /// Number of listeners registered for `kind`.
  pub fn listener_count(&self, kind: ClusterEventKind) -> usize {
    self.listeners.get(&kind).map_or(0, Vec::len)
  }

  fn dispatch(&mut self, event: &ClusterEvent<'_, G, X, R>) {
    if let Some(listeners) = self.listeners.get_mut(&event.kind()) {
      for listener in listeners.iter_mut() {
        listener(event);
      }
    }
  }
}

impl<G: ?Sized, X, R> Default for EventMeasurement<G, X, R> {
  fn default() -> Self {
    Self::new()
  }
}

impl<G: ?Sized, X, R> fmt::Debug for EventMeasurement<G, X, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EventMeasurement")
      .field("pre_cluster", &self.listener_count(ClusterEventKind::PreCluster))
      .field("post_cluster", &self.listener_count(ClusterEventKind::PostCluster))
      .finish()
  }
}

impl<G: ?Sized, X, R> Measurement<G, X, R> for EventMeasurement<G, X, R> {
  fn pre_cluster(&mut self, state: &SweepState<'_, G, X>, seed: VertexId, transform: &R) {
    self.dispatch(&ClusterEvent::PreCluster {
      state,
      seed,
      transform,
    });
  }

  fn post_cluster(&mut self, state: &SweepState<'_, G, X>) {
    self.dispatch(&ClusterEvent::PostCluster { state });
  }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;
