//! Movement rule violations.
//!
//! The message text of each variant is part of the external interface:
//! it is passed verbatim to `Presenter::notify_error`.

use super::coord::Coordinate;
use super::unit::UnitId;

/// Errors raised while validating or executing a unit movement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Moving unit to position out of bounds!")]
    OutOfBounds { target: Coordinate },

    #[error("Moving unit to it's own position!")]
    SelfMove { position: Coordinate },

    #[error("Could not locate requested unit.")]
    UnitNotFound { unit_id: UnitId },

    /// The unit is registered but stands on no tile.
    #[error("Unit is not placed on the map.")]
    UnitNotPlaced { unit_id: UnitId },

    #[error("walk direction components must each be -1, 0 or 1: {0}")]
    InvalidDirection(Coordinate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed_strings() {
        let target = Coordinate::new(-1, 9);
        assert_eq!(
            MoveError::OutOfBounds { target }.to_string(),
            "Moving unit to position out of bounds!"
        );
        assert_eq!(
            MoveError::SelfMove { position: target }.to_string(),
            "Moving unit to it's own position!"
        );
        assert_eq!(
            MoveError::UnitNotFound { unit_id: 12 }.to_string(),
            "Could not locate requested unit."
        );
        assert_eq!(
            MoveError::UnitNotPlaced { unit_id: 12 }.to_string(),
            "Unit is not placed on the map."
        );
    }

    #[test]
    fn invalid_direction_names_the_offset() {
        let err = MoveError::InvalidDirection(Coordinate::new(2, 0));
        assert_eq!(
            err.to_string(),
            "walk direction components must each be -1, 0 or 1: (2, 0)"
        );
    }
}
