use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use orrery_assets::{AssetStore, BodyAppearance, SpriteStyle};
use orrery_kernel::{Scene, SceneConfig};
use orrery_render::{DebugTextRenderer, LightRig, RecordingBoundary, Renderer, bind_scene, present};
use orrery_tools::SceneInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orrery-cli", about = "Headless driver for the orrery simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Run the frame loop headlessly
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Scene configuration (YAML); the solar system preset when absent
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Particle RNG seed, overrides the config
        #[arg(short, long)]
        seed: Option<u64>,
        /// Particle count, overrides the config
        #[arg(short, long)]
        particles: Option<usize>,
        /// Asset manifest (JSON); built-in names when absent
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Print the debug text render of the final frame
        #[arg(long)]
        dump: bool,
    },
    /// Print the default scene configuration as YAML
    Config,
    /// Print every body's position at a given time without ticking
    Bodies {
        /// Simulated days since t = 0
        #[arg(short, long, default_value = "0")]
        days: f64,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the resolved appearance for each body
    Assets {
        #[arg(long)]
        manifest: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(p) => SceneConfig::load(p)
            .with_context(|| format!("loading scene config {}", p.display())),
        None => Ok(SceneConfig::default()),
    }
}

fn load_assets(path: Option<&Path>) -> anyhow::Result<AssetStore> {
    match path {
        Some(p) => {
            AssetStore::load(p).with_context(|| format!("loading asset manifest {}", p.display()))
        }
        None => Ok(AssetStore::solar_system_defaults()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("orrery-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("assets: {}", orrery_assets::crate_info());
            println!("render: {}", orrery_render::crate_info());
            println!("tools: {}", orrery_tools::crate_info());
        }
        Commands::Run {
            ticks,
            config,
            seed,
            particles,
            assets,
            dump,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.particles.seed = Some(seed);
            }
            if let Some(count) = particles {
                config.particles.count = count;
            }
            let store = load_assets(assets.as_deref())?;

            let mut scene = Scene::from_config(&config)?;
            let mut boundary = RecordingBoundary::new();
            bind_scene(&scene, &store, &LightRig::default(), &mut boundary);

            let frame_seconds = scene.clock().particle_dt();
            for _ in 0..ticks {
                let report = scene.tick();
                let elapsed = report.frame as f32 * frame_seconds;
                present(&scene, &report, elapsed, &mut boundary);
            }
            tracing::info!(
                frames = ticks,
                uploads = boundary.particle_uploads(),
                "run finished"
            );

            println!("{}", SceneInspector::summary(&scene));
            println!("{}", SceneInspector::particle_stats(&scene));
            if let Some(light) = boundary.light_position() {
                println!("Light: ({:.2}, {:.2}, {:.2})", light.x, light.y, light.z);
            }
            if dump {
                print!("{}", DebugTextRenderer::new().render(&scene));
            }
        }
        Commands::Config => {
            print!("{}", SceneConfig::default().to_yaml_string()?);
        }
        Commands::Bodies { days, config } => {
            let config = load_config(config.as_deref())?;
            config.validate()?;
            println!("t = {days} days");
            for body in &config.bodies {
                let m = body.elements.world_transform(days);
                let p = orrery_common::transform::translation_of(&m);
                let angle = body.elements.orbit_position_deg(days).rem_euclid(360.0);
                println!(
                    "  {:<8} pos=({:.3}, {:.3}, {:.3}) orbit={:.2}deg",
                    body.name, p.x, p.y, p.z, angle
                );
            }
        }
        Commands::Assets { manifest, config } => {
            let config = load_config(config.as_deref())?;
            let store = load_assets(manifest.as_deref())?;
            println!("Assets registered: {}", store.len());
            for (i, body) in config.bodies.iter().enumerate() {
                let a = BodyAppearance::resolve(&store, &body.texture, i == 0);
                println!(
                    "  {:<8} mesh={} color={} normal={} shininess={}",
                    body.name,
                    a.mesh.is_some(),
                    a.color.is_some(),
                    a.normal.is_some(),
                    a.material.shininess
                );
            }
            let sprite = SpriteStyle::resolve(&store);
            println!(
                "Corona: textured={} tint={:?} size={}",
                sprite.is_textured(),
                sprite.tint,
                sprite.point_size
            );
        }
    }

    Ok(())
}
