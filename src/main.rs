//! Headless walkthrough of the landing page: runs the loading screen and
//! then the 3D scene on a simulated 60 fps clock, logging what a rendering
//! host would draw.
//!
//! Usage: `xr-showcase [options.toml] [seconds]`

use std::path::Path;

use web_time::{Duration, Instant};
use xr_showcase::loader::{LoaderEvent, PageEvent, PageLoader};
use xr_showcase::options::Options;
use xr_showcase::scene::ShowcaseScene;
use xr_showcase::util::frame_clock::FrameClock;

const FRAME: Duration = Duration::from_micros(16_667);

fn load_options(arg: Option<&str>) -> Options {
    let Some(path) = arg else {
        return Options::default();
    };
    match Options::load(Path::new(path)) {
        Ok(options) => {
            log::info!("Loaded options from '{path}'");
            options
        }
        Err(e) => {
            log::error!("Failed to load options '{path}': {e}");
            std::process::exit(1);
        }
    }
}

fn log_scene(scene: &ShowcaseScene, page: &PageLoader, now: Instant, fps: f32) {
    let animator = scene.animator();
    let globe_yaw = animator
        .transform(scene.globe())
        .map_or(0.0, |t| t.rotation.y);
    let headset_scale = scene
        .headset()
        .and_then(|rig| animator.transform(rig.headset))
        .map_or(0.0, |t| t.scale.x);
    log::info!(
        "globe yaw {globe_yaw:.2} rad, headset scale {headset_scale:.2}, \
         content opacity {:.2}, {fps:.0} fps",
        page.content_opacity(now)
    );
    for (id, transform) in animator.transforms() {
        log::trace!("{id:?}: {transform:?}");
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = load_options(args.get(1).map(String::as_str));
    let seconds = args
        .get(2)
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(8.0)
        .max(0.0);

    let t0 = Instant::now();
    let mut page = PageLoader::new(&options.loader, &options.page, t0);
    let mut scene: Option<(ShowcaseScene, FrameClock)> = None;

    let frames = (seconds / FRAME.as_secs_f32()) as u32;
    for frame in 0..=frames {
        let now = t0 + FRAME * frame;

        for event in page.update(now) {
            match event {
                PageEvent::Loader(LoaderEvent::StatusChanged(_)) => {
                    if let Some(loader) = page.loader() {
                        log::info!(
                            "[{:>3}%] {}",
                            loader.display_percent(),
                            loader.status_message()
                        );
                    }
                }
                PageEvent::Loader(LoaderEvent::Progress(p)) => {
                    log::debug!("progress {p:.1}%");
                }
                PageEvent::ContentShown => {
                    scene = Some((
                        ShowcaseScene::new(&options.scene),
                        FrameClock::new(now),
                    ));
                }
                other => log::info!("{other:?}"),
            }
        }

        if let Some((scene, clock)) = scene.as_mut() {
            let time = clock.tick(now);
            scene.advance(time);
            if frame % 60 == 0 {
                log_scene(scene, &page, now, clock.fps());
            }
        }
    }

    if scene.is_none() {
        log::warn!("content was never shown within {seconds}s");
    }
}
