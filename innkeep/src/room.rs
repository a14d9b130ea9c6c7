//! Room types: identifiers, labels, nightly cost and the room record.
//!
//! Field values are validated when the value types are built, so a
//! [`Room`] itself never needs to check anything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::ClientId;
use crate::error::ValidationError;

/// Identifier of a room, assigned by the [`Hotel`](crate::Hotel).
///
/// Room ids start at 1; 0 is never a valid id.
///
/// # Examples
///
/// ```
/// use innkeep::RoomId;
///
/// let id = RoomId::try_from(1).unwrap();
/// assert_eq!(id.value(), 1);
/// assert!(RoomId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(u32);

impl RoomId {
    /// The first id handed out by a hotel.
    pub const FIRST: Self = Self(1);

    /// Returns the underlying number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<u32> for RoomId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(ValidationError {
                field: "room id".into(),
                message: "room ids start at 1".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display label of a room, such as `101` or `A-12`.
///
/// Labels are trimmed and must not be empty. They are not required to be
/// unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomLabel(String);

impl RoomLabel {
    /// Creates a label from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty after trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::RoomLabel;
    ///
    /// assert_eq!(RoomLabel::new("  A-12 ").unwrap().as_str(), "A-12");
    /// assert!(RoomLabel::new("   ").is_err());
    /// ```
    pub fn new(label: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "number".into(),
                message: "room number must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Nightly cost of a room.
///
/// Always finite, strictly positive and at most [`CostPerNight::MAX`], which
/// guards against typing mistakes such as an extra zero or two.
///
/// # Examples
///
/// ```
/// use innkeep::CostPerNight;
///
/// let cost = CostPerNight::try_from(49.5).unwrap();
/// assert_eq!(cost.value(), 49.5);
/// assert_eq!(cost.to_string(), "49.50");
///
/// assert!(CostPerNight::try_from(0.0).is_err());
/// assert!(CostPerNight::try_from(f64::NAN).is_err());
/// assert!(CostPerNight::try_from(2_000_000.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CostPerNight(f64);

impl CostPerNight {
    /// Largest accepted nightly cost.
    pub const MAX: f64 = 1_000_000.0;

    /// Returns the cost as a plain number.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Checks a cost against a caller-supplied ceiling, which must itself be
    /// within [`CostPerNight::MAX`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite, not positive, or above
    /// `max`.
    pub fn with_ceiling(value: f64, max: f64) -> Result<Self, ValidationError> {
        let max = max.min(Self::MAX);
        if !value.is_finite() {
            return Err(ValidationError {
                field: "cost_per_night".into(),
                message: "cost must be a finite number".into(),
            });
        }
        if value <= 0.0 {
            return Err(ValidationError {
                field: "cost_per_night".into(),
                message: "cost must be greater than 0".into(),
            });
        }
        if value > max {
            return Err(ValidationError {
                field: "cost_per_night".into(),
                message: format!("cost must not exceed {max:.2}"),
            });
        }
        Ok(Self(value))
    }
}

impl TryFrom<f64> for CostPerNight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::with_ceiling(value, Self::MAX)
    }
}

impl From<CostPerNight> for f64 {
    fn from(cost: CostPerNight) -> Self {
        cost.0
    }
}

impl fmt::Display for CostPerNight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A bookable room.
///
/// The occupant is only ever changed by the hotel's booking and
/// cancellation operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    id: RoomId,
    number: RoomLabel,
    cost_per_night: CostPerNight,
    occupant: Option<ClientId>,
}

impl Room {
    /// Creates a free room.
    #[must_use]
    pub const fn new(id: RoomId, number: RoomLabel, cost_per_night: CostPerNight) -> Self {
        Self {
            id,
            number,
            cost_per_night,
            occupant: None,
        }
    }

    /// Returns the room id.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub const fn number(&self) -> &RoomLabel {
        &self.number
    }

    /// Returns the nightly cost.
    #[must_use]
    pub const fn cost_per_night(&self) -> CostPerNight {
        self.cost_per_night
    }

    /// Returns the client holding this room, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<ClientId> {
        self.occupant
    }

    /// Returns `true` if a client holds this room.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn occupy(&mut self, client: ClientId) {
        self.occupant = Some(client);
    }

    pub(crate) fn vacate(&mut self) {
        self.occupant = None;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {}/night ",
            self.id, self.number, self.cost_per_night
        )?;
        match self.occupant {
            Some(client) => write!(f, "occupied by client #{client}"),
            None => write!(f, "free"),
        }
    }
}
