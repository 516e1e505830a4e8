//! Hollow Vale native entry point
//!
//! There is no window here: the autopilot plays the game at 60 Hz and every
//! frame is tessellated into a `VertexBatch`.

use std::path::PathBuf;

use hollow_vale::assets::{ImageAssets, SpriteSheet};
use hollow_vale::clock::FrameClock;
use hollow_vale::renderer::VertexBatch;
use hollow_vale::settings::DEFAULT_SETTINGS_FILE;
use hollow_vale::sim::Autopilot;
use hollow_vale::{Game, Settings};

const USAGE: &str = "usage: hollow-vale [--settings <path>] [--frames <n>]";

#[derive(Debug, thiserror::Error)]
enum ArgError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid frame count {0:?}")]
    InvalidFrames(String),

    #[error("unknown argument {0:?}")]
    Unknown(String),
}

#[derive(Debug)]
struct CliArgs {
    settings_path: PathBuf,
    frames: Option<u64>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgError> {
        let mut parsed = Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            frames: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--settings" => {
                    let path = args.next().ok_or(ArgError::MissingValue("--settings"))?;
                    parsed.settings_path = PathBuf::from(path);
                }
                "--frames" => {
                    let value = args.next().ok_or(ArgError::MissingValue("--frames"))?;
                    let frames = value.parse().map_err(|_| ArgError::InvalidFrames(value))?;
                    parsed.frames = Some(frames);
                }
                _ => return Err(ArgError::Unknown(arg)),
            }
        }

        Ok(parsed)
    }
}

fn main() {
    env_logger::init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let mut settings = Settings::load(&args.settings_path);
    if args.frames.is_some() {
        settings.max_frames = args.frames;
    }
    let max_frames = settings.max_frames;

    log::info!("Hollow Vale starting (seed {})", settings.seed);

    let sprites = SpriteSheet::load(&ImageAssets::new(&settings.asset_dir));
    let mut game = Game::new(settings);
    let mut pilot = Autopilot::new();
    let mut batch = VertexBatch::new();
    let mut clock = FrameClock::default();
    log::debug!("Frame period {:?}", clock.period());

    while game.is_running() {
        if max_frames.is_some_and(|max| game.frame_count() >= max) {
            log::info!("Frame limit reached");
            break;
        }

        let input = pilot.next_input(game.phase(), game.session());
        game.frame(&input, &mut batch, &sprites);

        log::trace!(
            "Frame {}: {} triangles, {} bytes",
            game.frame_count(),
            batch.triangle_count(),
            batch.as_bytes().len()
        );
        clock.wait();
    }

    let session = game.session();
    log::info!(
        "Stopped after {} frames ({} of {} paced frames late): phase {:?}, player health {}/{}, boss {}",
        game.frame_count(),
        clock.overruns(),
        clock.frames(),
        game.phase(),
        session.player.health,
        session.player.max_health,
        if session.boss_defeated { "defeated" } else { "standing" },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::parse(args(&[])).expect("parse");
        assert_eq!(parsed.settings_path, PathBuf::from(DEFAULT_SETTINGS_FILE));
        assert_eq!(parsed.frames, None);
    }

    #[test]
    fn test_settings_and_frames() {
        let parsed =
            CliArgs::parse(args(&["--frames", "600", "--settings", "x.json"])).expect("parse");
        assert_eq!(parsed.settings_path, PathBuf::from("x.json"));
        assert_eq!(parsed.frames, Some(600));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(matches!(
            CliArgs::parse(args(&["--frames"])),
            Err(ArgError::MissingValue("--frames"))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--frames", "lots"])),
            Err(ArgError::InvalidFrames(_))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--fast"])),
            Err(ArgError::Unknown(_))
        ));
    }
}
