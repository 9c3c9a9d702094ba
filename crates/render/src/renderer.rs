use std::fmt::Write as _;

use orrery_kernel::Scene;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene state and produces output. It never mutates the
/// scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene.
    fn render(&self, scene: &Scene) -> Self::Output;
}

/// Produces a human-readable dump of the scene.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene) -> String {
        let clock = scene.clock();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Scene (frame={}, t={:.4} days) ===",
            clock.frame(),
            clock.global_time_days()
        );
        let _ = writeln!(out, "Bodies: {}", scene.orbits().len());

        for body in scene.orbits().iter() {
            let p = body.world_position();
            let _ = writeln!(
                out,
                "  [{}] {:<8} pos=({:.2}, {:.2}, {:.2})",
                body.id().short(),
                body.name(),
                p.x,
                p.y,
                p.z
            );
        }

        let particles = scene.particles();
        match particles.distance_stats() {
            Some(stats) => {
                let _ = writeln!(
                    out,
                    "Particles: {} dist min={:.3} mean={:.3} max={:.3}",
                    particles.len(),
                    stats.min,
                    stats.mean,
                    stats.max
                );
            }
            None => {
                let _ = writeln!(out, "Particles: 0");
            }
        }

        out
    }
}
