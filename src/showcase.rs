//! Static catalog of showcased projects.
//!
//! Each project becomes a planet orbiting the central sun, with one
//! satellite per tech-stack entry. Everything here is plain data plus
//! the formulas deriving orbital parameters from it; spawning lives in
//! [`crate::scene`].

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::focus::BodyId;
use crate::orbit::OrbitalParams;

/// Visual size class of a project planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Planet mesh radius in scene units.
    pub fn radius(self) -> f32 {
        match self {
            SizeClass::Small => 0.4,
            SizeClass::Medium => 0.55,
            SizeClass::Large => 0.7,
        }
    }
}

/// Surface style of a project planet. Purely cosmetic; picks the
/// material finish and extra shells when the planet is spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanetKind {
    Gas,
    Rocky,
    Ice,
    Volcanic,
    Oceanic,
}

/// Material parameters a [`PlanetKind`] maps to.
pub struct SurfaceFinish {
    pub metallic: f32,
    pub roughness: f32,
    /// Emissive multiplier on the accent color.
    pub glow: f32,
}

impl PlanetKind {
    /// Surface finish for planets of this kind. Ice is glassy, rock is
    /// matte, volcanic surfaces glow from within.
    pub fn finish(self) -> SurfaceFinish {
        match self {
            PlanetKind::Gas => SurfaceFinish {
                metallic: 0.1,
                roughness: 0.8,
                glow: 0.25,
            },
            PlanetKind::Rocky => SurfaceFinish {
                metallic: 0.2,
                roughness: 0.9,
                glow: 0.15,
            },
            PlanetKind::Ice => SurfaceFinish {
                metallic: 0.4,
                roughness: 0.15,
                glow: 0.3,
            },
            PlanetKind::Volcanic => SurfaceFinish {
                metallic: 0.3,
                roughness: 0.7,
                glow: 0.5,
            },
            PlanetKind::Oceanic => SurfaceFinish {
                metallic: 0.6,
                roughness: 0.25,
                glow: 0.2,
            },
        }
    }
}

/// One showcased project and its case-study details.
pub struct ProjectInfo {
    pub id: BodyId,
    pub title: &'static str,
    pub description: &'static str,
    /// Tech-stack entries; each one orbits the planet as a satellite.
    pub tech: &'static [&'static str],
    /// Accent color as sRGB components in 0..=1.
    pub color: (f32, f32, f32),
    pub size: SizeClass,
    pub kind: PlanetKind,
    /// Orbit radius around the sun, scene units.
    pub orbit_radius: f32,
    /// Orbit angular speed, radians per scene-second.
    pub orbit_speed: f32,
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    pub challenge: Option<&'static str>,
    pub solution: Option<&'static str>,
    pub impact: &'static [&'static str],
    pub features: &'static [&'static str],
}

impl ProjectInfo {
    /// Accent color as a Bevy color.
    pub fn color(&self) -> Color {
        Color::srgb(self.color.0, self.color.1, self.color.2)
    }

    /// Orbital parameters of the planet itself. The bob rides at half
    /// the orbital frequency so planets drift gently through the
    /// ecliptic rather than wobbling.
    pub fn orbital_params(&self) -> OrbitalParams {
        OrbitalParams::planar(self.orbit_radius, self.orbit_speed, 0.0)
            .with_bob(0.3, 0.5 * self.orbit_speed)
    }

    /// Orbital parameters of the `index`-th tech satellite, relative
    /// to the planet. Each satellite sits on its own shell, slightly
    /// faster than the last, with phases spread around the circle.
    pub fn satellite_params(&self, index: usize) -> OrbitalParams {
        let i = index as f32;
        let speed = 1.5 + 0.3 * i;
        OrbitalParams::planar(self.size.radius() + 0.3 + 0.15 * i, speed, i / 4.0 * TAU)
            .with_bob(0.1, 2.0 * speed)
    }
}

/// Look up a project by body id.
pub fn find(id: BodyId) -> Option<&'static ProjectInfo> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// All showcased projects, innermost orbit last.
pub static PROJECTS: &[ProjectInfo] = &[
    ProjectInfo {
        id: BodyId("nebula-api"),
        title: "NEBULA API",
        description: "Event-driven ingestion gateway that fans telemetry out to a dozen \
                      downstream consumers with per-tenant rate limiting and replay.",
        tech: &["Rust", "Axum", "NATS", "Postgres"],
        color: (0.0, 0.831, 1.0),
        size: SizeClass::Large,
        kind: PlanetKind::Gas,
        orbit_radius: 4.0,
        orbit_speed: 0.3,
        live_url: Some("https://nebula-api.example.com"),
        source_url: Some("https://github.com/example/nebula-api"),
        challenge: Some(
            "Telemetry producers burst unpredictably; a single slow consumer used to stall \
             the whole ingestion path.",
        ),
        solution: Some(
            "Decoupled producers from consumers with a durable stream per tenant, added \
             replay from any offset, and enforced fairness with token-bucket limits.",
        ),
        impact: &[
            "120k events/s sustained",
            "Zero data loss across deploys",
            "p99 ingest under 8ms",
            "One binary, no sidecar",
        ],
        features: &[
            "Per-tenant replay cursors",
            "Backpressure-aware fan-out",
            "Hot config reload",
            "Structured audit trail",
        ],
    },
    ProjectInfo {
        id: BodyId("stellar-ui"),
        title: "STELLAR UI",
        description: "Design system powering 50+ micro-frontends with atomic components, a \
                      theme engine, and accessibility-first architecture.",
        tech: &["React", "TypeScript", "Storybook"],
        color: (0.659, 0.333, 0.969),
        size: SizeClass::Medium,
        kind: PlanetKind::Rocky,
        orbit_radius: 6.0,
        orbit_speed: 0.25,
        live_url: Some("https://stellar-ui.example.com"),
        source_url: Some("https://github.com/example/stellar-ui"),
        challenge: Some(
            "Dozens of teams shipped inconsistent interfaces and re-solved the same \
             accessibility problems in isolation.",
        ),
        solution: Some(
            "Built a tokenized component library with a theming engine and contract tests, \
             so every product inherits keyboard navigation and contrast rules for free.",
        ),
        impact: &[
            "50+ frontends unified",
            "WCAG AA by default",
            "40% less UI code per team",
            "Themes swap at runtime",
        ],
        features: &[
            "Atomic component set",
            "Design-token pipeline",
            "Visual regression suite",
            "Per-tenant theming",
        ],
    },
    ProjectInfo {
        id: BodyId("orbit-sync"),
        title: "ORBIT SYNC",
        description: "Offline-first synchronization engine that reconciles divergent field \
                      edits into a single consistent history.",
        tech: &["Rust", "SQLite", "CRDTs", "gRPC"],
        color: (0.133, 0.773, 0.369),
        size: SizeClass::Large,
        kind: PlanetKind::Oceanic,
        orbit_radius: 8.0,
        orbit_speed: 0.2,
        live_url: Some("https://orbit-sync.example.com"),
        source_url: Some("https://github.com/example/orbit-sync"),
        challenge: Some(
            "Field crews edit the same records for days without connectivity; last-write-wins \
             merges silently destroyed their work.",
        ),
        solution: Some(
            "Modeled every record as a CRDT with a compact causal log, syncing deltas over \
             gRPC when a link appears and folding conflicts deterministically on-device.",
        ),
        impact: &[
            "Conflict-free merges, no manual review",
            "Week-long offline sessions supported",
            "Sync payloads 30x smaller than snapshots",
            "Same engine on desktop and mobile",
        ],
        features: &[
            "Delta-based sync protocol",
            "Deterministic conflict folding",
            "Tombstone compaction",
            "End-to-end encrypted transport",
        ],
    },
    ProjectInfo {
        id: BodyId("quantum-cli"),
        title: "QUANTUM CLI",
        description: "Terminal workbench that turns a sprawling deployment runbook into \
                      guided, resumable pipelines.",
        tech: &["Rust", "Clap", "Ratatui", "SSH"],
        color: (0.961, 0.620, 0.043),
        size: SizeClass::Small,
        kind: PlanetKind::Volcanic,
        orbit_radius: 3.0,
        orbit_speed: 0.4,
        live_url: None,
        source_url: Some("https://github.com/example/quantum-cli"),
        challenge: Some(
            "Release engineers followed a 40-step wiki page by hand; a missed step meant a \
             broken deploy and an afternoon of archaeology.",
        ),
        solution: Some(
            "Encoded the runbook as declarative pipeline stages with checkpoints, so a failed \
             run resumes where it stopped instead of starting over.",
        ),
        impact: &[
            "Deploys cut from hours to minutes",
            "Every step logged and auditable",
            "Failed runs resume mid-pipeline",
            "Zero wiki drift since launch",
        ],
        features: &[
            "Declarative pipeline stages",
            "Checkpointed resume",
            "Parallel host execution",
            "Dry-run previews",
        ],
    },
    ProjectInfo {
        id: BodyId("pulsar-ml"),
        title: "PULSAR ML",
        description: "Streaming anomaly detector that flags failing sensors minutes before \
                      they take a production line down.",
        tech: &["Python", "PyTorch", "Kafka", "ONNX", "Grafana"],
        color: (0.925, 0.282, 0.600),
        size: SizeClass::Medium,
        kind: PlanetKind::Ice,
        orbit_radius: 5.5,
        orbit_speed: 0.28,
        live_url: None,
        source_url: Some("https://github.com/example/pulsar-ml"),
        challenge: Some(
            "Sensor failures surfaced only after a line stopped; batch retraining lagged \
             drifting baselines by weeks.",
        ),
        solution: Some(
            "Trained a lightweight sequence model exported to ONNX, scored the stream \
             in-process next to Kafka, and retrained nightly against rolling windows.",
        ),
        impact: &[
            "Faults flagged 12 min early on average",
            "False positives under 2%",
            "Inference at 40k readings/s per core",
            "Nightly retraining, no downtime",
        ],
        features: &[
            "Rolling-window retraining",
            "ONNX edge inference",
            "Drift dashboards",
            "Severity-ranked alerting",
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_find_resolves_every_project() {
        for project in PROJECTS {
            let found = find(project.id).expect("registered id must resolve");
            assert_eq!(found.title, project.title);
        }
        assert!(find(BodyId("kuiper-belt")).is_none());
    }

    #[test]
    fn test_orbits_are_valid() {
        for project in PROJECTS {
            assert!(project.orbit_radius >= 0.0);
            assert!(project.orbit_speed != 0.0, "{} would never move", project.title);
            assert!(!project.tech.is_empty());
        }
    }

    #[test]
    fn test_planet_params_match_catalog() {
        let nebula = find(BodyId("nebula-api")).unwrap();
        let params = nebula.orbital_params();
        assert_relative_eq!(params.orbit_radius, 4.0, epsilon = 1e-6);
        assert_relative_eq!(params.orbit_speed, 0.3, epsilon = 1e-6);
        assert_relative_eq!(params.phase_offset, 0.0, epsilon = 1e-6);
        assert_relative_eq!(params.vertical_amplitude, 0.3, epsilon = 1e-6);
        assert_relative_eq!(params.vertical_frequency, 0.15, epsilon = 1e-6);
    }

    #[test]
    fn test_satellite_shells_widen_and_speed_up() {
        let nebula = find(BodyId("nebula-api")).unwrap();
        let first = nebula.satellite_params(0);
        let second = nebula.satellite_params(1);

        assert_relative_eq!(first.orbit_radius, 1.0, epsilon = 1e-6);
        assert_relative_eq!(first.orbit_speed, 1.5, epsilon = 1e-6);
        assert_relative_eq!(second.orbit_radius, 1.15, epsilon = 1e-6);
        assert_relative_eq!(second.orbit_speed, 1.8, epsilon = 1e-6);
        assert!(second.phase_offset > first.phase_offset);
    }

    #[test]
    fn test_planet_kinds_have_distinct_finishes() {
        let kinds = [
            PlanetKind::Gas,
            PlanetKind::Rocky,
            PlanetKind::Ice,
            PlanetKind::Volcanic,
            PlanetKind::Oceanic,
        ];
        let finishes: HashSet<_> = kinds
            .iter()
            .map(|kind| {
                let f = kind.finish();
                (f.metallic.to_bits(), f.roughness.to_bits(), f.glow.to_bits())
            })
            .collect();
        assert_eq!(finishes.len(), kinds.len());
    }
}
