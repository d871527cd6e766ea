//! Single-value Actor
//!
//! An Actor owns a `Mutable<T>` and a task that applies incoming events one at
//! a time. Views read it through signals only.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state container whose only writer is its own processing task.
///
/// ```rust
/// let (shadow_spread_changed_relay, mut shadow_spread_changed_stream) = relay();
///
/// let spread = Actor::new(50_u8, async move |state| {
///     while let Some(spread) = shadow_spread_changed_stream.next().await {
///         state.set_neq(spread);
///     }
/// });
///
/// El::new().child_signal(spread.signal().map(|spread| Text::new(spread)))
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    // Dropping the last clone stops the processor
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    #[track_caller]
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            task_handle,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Derive a value from the state without cloning it.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        U: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::{StreamExt, select};
    use zoon::SignalExt;

    #[tokio::test]
    async fn test_actor_applies_events_sequentially() {
        let (spread_relay, mut spread_stream) = relay::<u8>();
        let (weight_relay, mut weight_stream) = relay::<u8>();

        let actor = Actor::new((50_u8, 10_u8), async move |state| {
            loop {
                select! {
                    Some(spread) = spread_stream.next() => {
                        state.lock_mut().0 = spread;
                    }
                    Some(weight) = weight_stream.next() => {
                        state.lock_mut().1 = weight;
                    }
                    complete => break,
                }
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        spread_relay.send(80);
        weight_relay.send(25);

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let value = actor.signal().to_stream().next().await.unwrap();
        assert_eq!(value, (80, 25));
    }
}
