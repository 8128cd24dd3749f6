//! Procedural water surface and the query machinery on top of it.
//!
//! `GerstnerWaves` plays the oracle role: units stage sample points under
//! their query id during a tick, `propagate` resolves them between ticks,
//! and fetches always return the most recently resolved batch. A fetch in
//! the same tick as a submission therefore sees the previous tick's
//! surface, which callers are required to tolerate.

pub mod config;

pub use config::WaveConfig;

use crate::traits::{QueryId, WaveOracle, WaveSample};
use crate::utils::math::deg_to_rad;
use crate::utils::rng::RngManager;
use log::warn;
use nalgebra::Vector3;
use rand::Rng;
use std::collections::HashMap;
use std::f64::consts::TAU;

/// One sinusoidal component of the surface
#[derive(Debug, Clone)]
struct WaveTrain {
    amplitude: f64,
    /// Wavenumber 2π/λ (1/m)
    wavenumber: f64,
    /// Unit travel direction in the horizontal plane
    dir_x: f64,
    dir_z: f64,
    /// Temporal frequency (rad/s)
    omega: f64,
    phase: f64,
}

#[derive(Debug, Default)]
struct QuerySlot {
    /// Points staged this tick, waiting for `propagate`
    pending: Option<Vec<Vector3<f64>>>,
    /// Results of the last propagation; the caller's fallback buffer
    ready: Vec<WaveSample>,
}

/// Sum-of-sines water surface implementing [`WaveOracle`].
#[derive(Debug)]
pub struct GerstnerWaves {
    trains: Vec<WaveTrain>,
    slots: HashMap<QueryId, QuerySlot>,
    next_id: u64,
    time: f64,
}

impl GerstnerWaves {
    pub fn new(config: &WaveConfig, rng_manager: &RngManager) -> Self {
        let mut rng = rng_manager.get_rng("waves");
        let count = config.wave_count.max(1);
        let spread = deg_to_rad(config.directional_spread_deg);
        let mean_direction = deg_to_rad(config.direction_deg);

        let trains = (0..count)
            .map(|_| {
                let amplitude =
                    config.amplitude / count as f64 * rng.gen_range(0.5..1.5);
                let wavelength = config.wavelength * rng.gen_range(0.5..1.5);
                let wavenumber = TAU / wavelength;
                let angle = mean_direction + rng.gen_range(-1.0..1.0) * spread;
                WaveTrain {
                    amplitude,
                    wavenumber,
                    dir_x: angle.sin(),
                    dir_z: angle.cos(),
                    omega: config.speed * wavenumber,
                    phase: rng.gen_range(0.0..TAU),
                }
            })
            .collect();

        Self {
            trains,
            slots: HashMap::new(),
            next_id: 0,
            time: 0.0,
        }
    }

    /// Advance the surface and resolve every pending submission.
    ///
    /// Driven once per tick by the simulation loop, after the units have
    /// sampled. Results land in the `ready` buffers and become visible to
    /// `fetch_results` on the next tick.
    pub fn propagate(&mut self, dt: f64) {
        self.time += dt;
        let trains = &self.trains;
        let time = self.time;
        for slot in self.slots.values_mut() {
            if let Some(points) = slot.pending.take() {
                slot.ready = points
                    .iter()
                    .map(|point| sample_trains(trains, point, time))
                    .collect();
            }
        }
    }

    /// Surface height at a horizontal position, at the current time.
    pub fn height_at(&self, x: f64, z: f64) -> f64 {
        sample_trains(&self.trains, &Vector3::new(x, 0.0, z), self.time).height
    }

    /// Full surface sample at a horizontal position, at the current time.
    pub fn sample_at(&self, point: &Vector3<f64>) -> WaveSample {
        sample_trains(&self.trains, point, self.time)
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of live query slots
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl WaveOracle for GerstnerWaves {
    fn register(&mut self) -> QueryId {
        let id = QueryId(self.next_id);
        self.next_id += 1;
        self.slots.insert(id, QuerySlot::default());
        id
    }

    fn submit_query_points(&mut self, id: QueryId, points: &[Vector3<f64>]) {
        match self.slots.get_mut(&id) {
            Some(slot) => slot.pending = Some(points.to_vec()),
            None => warn!("wave query {:?} submitted without registration", id),
        }
    }

    fn fetch_results(&self, id: QueryId) -> Option<&[WaveSample]> {
        self.slots
            .get(&id)
            .filter(|slot| !slot.ready.is_empty())
            .map(|slot| slot.ready.as_slice())
    }

    fn release(&mut self, id: QueryId) {
        self.slots.remove(&id);
    }
}

fn sample_trains(trains: &[WaveTrain], point: &Vector3<f64>, time: f64) -> WaveSample {
    let mut height = 0.0;
    let mut slope_x = 0.0;
    let mut slope_z = 0.0;
    for train in trains {
        let arg = train.wavenumber * (train.dir_x * point.x + train.dir_z * point.z)
            - train.omega * time
            + train.phase;
        height += train.amplitude * arg.sin();
        let slope = train.amplitude * train.wavenumber * arg.cos();
        slope_x += slope * train.dir_x;
        slope_z += slope * train.dir_z;
    }
    WaveSample {
        height,
        normal: Vector3::new(-slope_x, 1.0, -slope_z).normalize(),
    }
}
