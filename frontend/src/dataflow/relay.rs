//! Event channel from UI widgets to Actors
//!
//! A Relay is the only way a widget talks to state: it sends a typed event,
//! the owning Actor receives it on the paired stream.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
#[cfg(debug_assertions)]
use std::sync::{Arc, OnceLock};

/// Typed event relay.
///
/// Relays are named after the event source: `{source}_{event}_relay`, e.g.
/// `shadow_color_changed_relay` or `copy_button_pressed_relay`.
///
/// In debug builds a relay remembers the first call site of [`Relay::send`]
/// and rejects sends from anywhere else, so every event has one emitter.
///
/// ```rust
/// let (shadow_spread_changed_relay, mut shadow_spread_changed_stream) = relay::<u8>();
/// shadow_spread_changed_relay.send(75);
/// assert_eq!(shadow_spread_changed_stream.next().await, Some(75));
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

#[derive(Debug, Clone)]
pub enum RelayError {
    /// The receiving stream was dropped
    ChannelClosed,
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),
            Err(previous) if previous == caller => Ok(()),
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Send an event, dropping it silently when nobody listens.
    ///
    /// Panics in debug builds when called from a second call site.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(e) = self.check_single_source() {
            panic!("{:?}", e);
        }

        let _ = self.sender.unbounded_send(value);
    }

    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;

        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Disconnected relay, every event is discarded.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_relay_delivers_in_order() {
        let (relay, mut receiver) = Relay::new();

        for spread in [10_u8, 20, 30] {
            relay.send(spread);
        }

        assert_eq!(receiver.next().await, Some(10));
        assert_eq!(receiver.next().await, Some(20));
        assert_eq!(receiver.next().await, Some(30));
    }

    #[tokio::test]
    async fn test_relay_try_send_after_receiver_dropped() {
        let (relay, mut receiver) = relay::<String>();
        // One call site for both sends, the single-emitter check stays quiet.
        let send = |color: &str| relay.try_send(color.to_string());

        assert!(send("#ffffff").is_ok());
        assert_eq!(receiver.next().await, Some("#ffffff".to_string()));

        drop(receiver);

        assert!(matches!(send("#000000"), Err(RelayError::ChannelClosed)));
    }

    #[test]
    fn test_default_relay_discards_events() {
        let relay = Relay::<u8>::default();
        relay.send(1);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_second_emitter_is_rejected() {
        let (relay, _receiver) = relay::<u8>();
        assert!(relay.try_send(1).is_ok());
        assert!(matches!(
            relay.try_send(2),
            Err(RelayError::MultipleEmitters { .. })
        ));
    }
}
