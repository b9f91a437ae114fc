//! Nearest-player target selection.

use glam::Vec3;

/// A live player tank as seen by the AI scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSighting {
    pub slot: usize,
    pub position: Vec3,
}

/// The chosen target and its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetLock {
    pub slot: usize,
    pub position: Vec3,
    pub distance: f32,
}

/// Pick the closest sighting to `from`.
///
/// Only a strictly closer sighting replaces the current best, so on a tie the
/// first one in scan order wins. Returns `None` when nothing is in view.
pub fn nearest_player(from: Vec3, sightings: &[PlayerSighting]) -> Option<TargetLock> {
    let mut best: Option<TargetLock> = None;
    let mut closest = f32::INFINITY;

    for sighting in sightings {
        let distance = from.distance(sighting.position);
        if distance < closest {
            closest = distance;
            best = Some(TargetLock {
                slot: sighting.slot,
                position: sighting.position,
                distance,
            });
        }
    }

    best
}
