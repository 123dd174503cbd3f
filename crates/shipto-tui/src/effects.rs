//! Effect bridge: runs workflow effects off the event loop.
//!
//! Each effect gets its own task holding a clone of the gateway; its outcome
//! returns to the app as an `Action::Workflow`, so the state is only ever
//! touched by the event loop.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use shipto_core::{Effect, Gateway};

use crate::action::Action;

pub fn spawn_effect(gateway: Gateway, effect: Effect, action_tx: mpsc::UnboundedSender<Action>) {
    debug!(?effect, "spawning effect");
    tokio::spawn(async move {
        let outcome = gateway.perform(effect).await;
        if action_tx.send(Action::Workflow(outcome)).is_err() {
            warn!("effect finished after the app shut down");
        }
    });
}
