//! Pointer gestures against a running scenario
//!
//! Pressing on (or near) a body selects it and grows it for as long as the
//! pointer stays down. Pressing on empty space starts a drag; releasing
//! launches a new body from the drag origin, with a velocity proportional to
//! the drag vector.
//!
//! All points are in world coordinates; see [`World::screen_to_world`].
//!
//! [`World::screen_to_world`]: crate::simulation::engine::World::screen_to_world

use std::time::Duration;

use rand::Rng;

use crate::error::Result;
use crate::simulation::params::ZOOM;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyId, NVec2, NewBody};

pub const INTERACTION_MARGIN: f64 = 200.0; // hit-test slack around a body, world units
pub const GROWTH_INTERVAL: Duration = Duration::from_millis(50);
pub const GROWTH_FACTOR: f64 = 1.1;
pub const LAUNCH_DIVISOR: f64 = ZOOM * 5.0e7; // drag distance -> velocity
pub const SPAWN_MASS: f64 = 1000.0;
pub const SPAWN_DENSITY: f64 = 0.01;

/// Repeating timer that fires every `interval` of accumulated time
#[derive(Debug, Clone)]
pub struct GrowthTimer {
    interval: Duration,
    carried: Duration,
}

impl GrowthTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            carried: Duration::ZERO,
        }
    }

    /// Add elapsed time, returning how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.carried += elapsed;
        let mut ticks = 0;
        while self.carried >= self.interval {
            self.carried -= self.interval;
            ticks += 1;
        }
        ticks
    }
}

/// What a press landed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressOutcome {
    Selected(BodyId),
    DragStarted(NVec2),
}

/// Gesture state between press and release
#[derive(Debug, Default)]
pub struct Pointer {
    selected: Option<(BodyId, GrowthTimer)>,
    drag_origin: Option<NVec2>,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected.as_ref().map(|(id, _)| *id)
    }

    pub fn drag_origin(&self) -> Option<NVec2> {
        self.drag_origin
    }

    /// Select the first body near `point`, or start a drag there
    pub fn press_at(&mut self, point: NVec2, scenario: &Scenario) -> PressOutcome {
        let hit = scenario
            .bodies()
            .iter()
            .find(|b| b.intersects(point, INTERACTION_MARGIN));

        match hit {
            Some(body) => {
                self.selected = Some((body.id(), GrowthTimer::new(GROWTH_INTERVAL)));
                PressOutcome::Selected(body.id())
            }
            None => {
                self.drag_origin = Some(point);
                PressOutcome::DragStarted(point)
            }
        }
    }

    /// Grow the selected body once per elapsed growth interval
    ///
    /// Returns the number of growth ticks applied. Does nothing without a
    /// selection or once the selected body is gone.
    pub fn hold(&mut self, elapsed: Duration, scenario: &mut Scenario) -> u32 {
        let Some((id, timer)) = self.selected.as_mut() else {
            return 0;
        };
        let Some(body) = scenario.body_mut(*id) else {
            return 0;
        };

        let ticks = timer.advance(elapsed);
        for _ in 0..ticks {
            body.increase(GROWTH_FACTOR);
        }
        ticks
    }

    /// End the gesture, launching a body if a drag was in progress
    ///
    /// The growth timer is always cancelled and the selection cleared.
    pub fn release_at<R: Rng>(
        &mut self,
        point: NVec2,
        scenario: &mut Scenario,
        rng: &mut R,
    ) -> Result<Option<BodyId>> {
        self.selected = None;

        let Some(origin) = self.drag_origin.take() else {
            return Ok(None);
        };

        let id = scenario.spawn(NewBody {
            mass: SPAWN_MASS,
            density: SPAWN_DENSITY,
            color: random_color(rng),
            position: origin,
            velocity: (point - origin) / LAUNCH_DIVISOR,
            is_black_hole: false,
        })?;
        log::debug!("launched {id:?} from {origin:?}");
        Ok(Some(id))
    }
}

/// Random `#rrggbb` color
pub fn random_color<R: Rng>(rng: &mut R) -> String {
    let [r, g, b]: [u8; 3] = rng.gen();
    format!("#{r:02x}{g:02x}{b:02x}")
}
