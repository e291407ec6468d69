//! Scene model for the navigation display.
//!
//! The store owns every displayed entity behind generational IDs, so the
//! display glue can hold cheap handles across route updates without
//! dangling references. Entities are plain data; drawing lives in
//! [`crate::render`].

use slotmap::{new_key_type, SlotMap};

use crate::error::SceneError;
use crate::geometry::{Leg, TurnSpec};
use crate::math::Point2;

new_key_type! {
    /// ID of a waypoint marker.
    pub struct WaypointId;
    /// ID of a transition-point marker.
    pub struct TransitionPointId;
    /// ID of a straight leg.
    pub struct LegId;
    /// ID of a turn arc.
    pub struct TurnId;
}

/// A named route fix drawn as a fixed-size square marker.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointData {
    pub position: Point2,
    pub name: Option<String>,
}

/// Point where a leg hands over to a turn arc (or back).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPointData {
    pub position: Point2,
}

/// A straight leg of the displayed route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegData {
    pub leg: Leg,
}

/// A turn joining two legs, ready for arc resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnData {
    pub spec: TurnSpec,
}

/// Central arena that owns all displayed entities plus the aircraft state.
#[derive(Debug, Default)]
pub struct SceneStore {
    waypoints: SlotMap<WaypointId, WaypointData>,
    transition_points: SlotMap<TransitionPointId, TransitionPointData>,
    legs: SlotMap<LegId, LegData>,
    turns: SlotMap<TurnId, TurnData>,
    aircraft_position: Option<Point2>,
}

impl SceneStore {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Waypoint operations ---

    /// Inserts a waypoint and returns its ID.
    pub fn add_waypoint(&mut self, data: WaypointData) -> WaypointId {
        self.waypoints.insert(data)
    }

    /// Returns the waypoint data, or an error if the ID is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn waypoint(&self, id: WaypointId) -> Result<&WaypointData, SceneError> {
        self.waypoints
            .get(id)
            .ok_or(SceneError::EntityNotFound("waypoint"))
    }

    /// Removes a waypoint, returning its data if it was present.
    pub fn remove_waypoint(&mut self, id: WaypointId) -> Option<WaypointData> {
        self.waypoints.remove(id)
    }

    /// Iterates over all waypoints.
    pub fn waypoints(&self) -> impl Iterator<Item = (WaypointId, &WaypointData)> {
        self.waypoints.iter()
    }

    // --- Transition point operations ---

    /// Inserts a transition point and returns its ID.
    pub fn add_transition_point(&mut self, data: TransitionPointData) -> TransitionPointId {
        self.transition_points.insert(data)
    }

    /// Returns the transition-point data, or an error if the ID is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn transition_point(
        &self,
        id: TransitionPointId,
    ) -> Result<&TransitionPointData, SceneError> {
        self.transition_points
            .get(id)
            .ok_or(SceneError::EntityNotFound("transition point"))
    }

    /// Iterates over all transition points.
    pub fn transition_points(
        &self,
    ) -> impl Iterator<Item = (TransitionPointId, &TransitionPointData)> {
        self.transition_points.iter()
    }

    // --- Leg operations ---

    /// Inserts a leg and returns its ID.
    pub fn add_leg(&mut self, data: LegData) -> LegId {
        self.legs.insert(data)
    }

    /// Returns the leg data, or an error if the ID is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn leg(&self, id: LegId) -> Result<&LegData, SceneError> {
        self.legs.get(id).ok_or(SceneError::EntityNotFound("leg"))
    }

    /// Iterates over all legs.
    pub fn legs(&self) -> impl Iterator<Item = (LegId, &LegData)> {
        self.legs.iter()
    }

    // --- Turn operations ---

    /// Inserts a turn and returns its ID.
    pub fn add_turn(&mut self, data: TurnData) -> TurnId {
        self.turns.insert(data)
    }

    /// Returns the turn data, or an error if the ID is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn turn(&self, id: TurnId) -> Result<&TurnData, SceneError> {
        self.turns.get(id).ok_or(SceneError::EntityNotFound("turn"))
    }

    /// Iterates over all turns.
    pub fn turns(&self) -> impl Iterator<Item = (TurnId, &TurnData)> {
        self.turns.iter()
    }

    // --- Aircraft state ---

    /// Updates the aircraft position from the state-vector feed.
    pub fn set_aircraft_position(&mut self, position: Point2) {
        self.aircraft_position = Some(position);
    }

    /// Returns the last known aircraft position, if any was received.
    #[must_use]
    pub fn aircraft_position(&self) -> Option<Point2> {
        self.aircraft_position
    }

    // --- Route lifecycle ---

    /// Drops the whole displayed route (waypoints, transition points,
    /// legs, turns) when a new leg list arrives. The aircraft position
    /// is independent of the route and survives.
    pub fn clear_route(&mut self) {
        self.waypoints.clear();
        self.transition_points.clear();
        self.legs.clear();
        self.turns.clear();
    }

    /// Returns `true` when no route entities are present.
    #[must_use]
    pub fn is_route_empty(&self) -> bool {
        self.waypoints.is_empty()
            && self.transition_points.is_empty()
            && self.legs.is_empty()
            && self.turns.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Leg;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn insert_and_lookup_round_trip() {
        let mut store = SceneStore::new();
        let wp = store.add_waypoint(WaypointData {
            position: p(10.0, 20.0),
            name: Some("TOU".to_owned()),
        });
        let tp = store.add_transition_point(TransitionPointData {
            position: p(15.0, 25.0),
        });
        let leg = store.add_leg(LegData {
            leg: Leg::new(p(0.0, 0.0), p(10.0, 20.0)),
        });

        assert!((store.waypoint(wp).unwrap().position.x - 10.0).abs() < f64::EPSILON);
        assert!((store.transition_point(tp).unwrap().position.y - 25.0).abs() < f64::EPSILON);
        assert!((store.leg(leg).unwrap().leg.length() - (500.0_f64).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn stale_id_lookup_fails() {
        let mut store = SceneStore::new();
        let wp = store.add_waypoint(WaypointData {
            position: p(0.0, 0.0),
            name: None,
        });
        store.remove_waypoint(wp);
        assert!(matches!(
            store.waypoint(wp),
            Err(SceneError::EntityNotFound("waypoint"))
        ));
    }

    #[test]
    fn clear_route_keeps_aircraft() {
        let mut store = SceneStore::new();
        store.set_aircraft_position(p(500.0, -200.0));
        store.add_waypoint(WaypointData {
            position: p(1.0, 1.0),
            name: None,
        });
        store.add_leg(LegData {
            leg: Leg::new(p(0.0, 0.0), p(1.0, 1.0)),
        });
        assert!(!store.is_route_empty());

        store.clear_route();
        assert!(store.is_route_empty());
        let ac = store.aircraft_position().unwrap();
        assert!((ac.x - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aircraft_position_tracks_latest_update() {
        let mut store = SceneStore::new();
        assert!(store.aircraft_position().is_none());
        store.set_aircraft_position(p(1.0, 2.0));
        store.set_aircraft_position(p(3.0, 4.0));
        let ac = store.aircraft_position().unwrap();
        assert!((ac.x - 3.0).abs() < f64::EPSILON);
        assert!((ac.y - 4.0).abs() < f64::EPSILON);
    }
}
