//! Rooms Domain - Physical Room State Machine
//!
//! This crate owns the physical state of every room: Vacant, Dirty,
//! Occupied, or Maintenance. All mutation goes through
//! [`RoomStatusManager`], which validates the transition against a
//! fixed adjacency table and appends an audit row for every change.
//!
//! "Reserved" is deliberately not a physical state. A room is
//! *logically* reserved when a live booking claims its dates; mixing
//! that into the physical machine is how rooms end up assigned to
//! guests while still dirty.

pub mod history;
pub mod manager;
pub mod room;
pub mod status;

pub use history::RoomStatusHistory;
pub use manager::RoomStatusManager;
pub use room::Room;
pub use status::{RoomStatus, RoomStatusError};
