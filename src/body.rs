//! Body model: an immutable configured body plus its per-date derived state.

use crate::calendar::{self, CalendarError, Date};
use crate::kepler::{self, KeplerSolver, OrbitalElements, OrbitalState};

/// A planet as configured: identity, display symbol, and fixed orbital
/// elements. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub symbol: char,
    pub elements: OrbitalElements,
}

/// A body together with the state derived for one target date.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedBody {
    pub body: Body,
    pub state: OrbitalState,
}

impl Body {
    /// Compute the body's heliocentric state for `date`, consuming the body
    /// so stale derived state cannot outlive a date change.
    pub fn position_on(
        self,
        date: Date,
        solver: KeplerSolver,
    ) -> Result<PositionedBody, CalendarError> {
        let days = calendar::days_since(self.elements.perihelion, date)?;
        let state = kepler::propagate(&self.elements, days, solver);
        Ok(PositionedBody { body: self, state })
    }
}
