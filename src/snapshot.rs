//! Serializable view of each object's vectors, for the info panel

use serde::Serialize;

use crate::core::{Footprint, ObjectId, SimResult, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VectorSnapshot {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub magnitude: f64,
}

impl From<Vector> for VectorSnapshot {
    fn from(v: Vector) -> Self {
        Self { x: v.x(), y: v.y(), angle: v.angle(), magnitude: v.magnitude() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectSnapshot {
    pub id: ObjectId,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    pub position: VectorSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<VectorSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<VectorSnapshot>,
    pub footprint: Footprint,
}

pub fn to_json(snapshots: &[ObjectSnapshot]) -> SimResult<String> {
    Ok(serde_json::to_string(snapshots)?)
}
