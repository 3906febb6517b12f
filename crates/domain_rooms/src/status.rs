//! Room status and the transition adjacency table

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Physical status of a room
///
/// Occupied can never jump straight to Vacant: a departing guest
/// always leaves the room Dirty until housekeeping clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Clean and unoccupied, ready for a guest
    Vacant,
    /// Needs cleaning before it can be assigned
    Dirty,
    /// A guest is currently in the room
    Occupied,
    /// Out of order for repair work
    Maintenance,
}

impl RoomStatus {
    /// Whether a transition to `target` is a member of the adjacency table
    pub fn can_transition_to(&self, target: RoomStatus) -> bool {
        use RoomStatus::*;
        matches!(
            (self, target),
            (Vacant, Dirty)
                | (Vacant, Occupied)
                | (Vacant, Maintenance)
                | (Dirty, Vacant)
                | (Dirty, Maintenance)
                | (Occupied, Dirty)
                | (Occupied, Maintenance)
                | (Maintenance, Vacant)
                | (Maintenance, Dirty)
        )
    }

    /// The states reachable from this one
    pub fn allowed_transitions(&self) -> &'static [RoomStatus] {
        use RoomStatus::*;
        match self {
            Vacant => &[Dirty, Occupied, Maintenance],
            Dirty => &[Vacant, Maintenance],
            Occupied => &[Dirty, Maintenance],
            Maintenance => &[Vacant, Dirty],
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomStatus::Vacant => "Vacant",
            RoomStatus::Dirty => "Dirty",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Maintenance => "Maintenance",
        };
        write!(f, "{label}")
    }
}

/// Errors raised by the room state machine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomStatusError {
    /// The attempted pair is not in the adjacency table
    #[error("Invalid room status transition from {from} to {to}")]
    InvalidTransition { from: RoomStatus, to: RoomStatus },
}

#[cfg(test)]
mod tests {
    use super::*;
    use RoomStatus::*;

    const ALL: [RoomStatus; 4] = [Vacant, Dirty, Occupied, Maintenance];

    #[test]
    fn test_adjacency_table() {
        assert!(Vacant.can_transition_to(Occupied));
        assert!(Occupied.can_transition_to(Dirty));
        assert!(Dirty.can_transition_to(Vacant));
        assert!(Maintenance.can_transition_to(Vacant));
    }

    #[test]
    fn test_occupied_cannot_skip_cleaning() {
        assert!(!Occupied.can_transition_to(Vacant));
    }

    #[test]
    fn test_no_self_transitions() {
        for status in ALL {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_allowed_transitions_agree_with_predicate() {
        for from in ALL {
            for to in ALL {
                let listed = from.allowed_transitions().contains(&to);
                assert_eq!(listed, from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }
}
