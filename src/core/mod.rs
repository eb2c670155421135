//! Core interception types.

mod accessor;
mod slot;

pub use accessor::TappedEnv;
pub use slot::ObserverSlot;
