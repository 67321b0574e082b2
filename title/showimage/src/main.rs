use std::{path::PathBuf, process::ExitCode, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use sdl::{
    Event, InitFlags, Point, Rect, RendererFlags, Surface, Texture, WINDOWPOS_UNDEFINED, Window,
    WindowFlags, event, keys::Code, main_thread,
};

const FRAME_TIME: Duration = Duration::from_millis(100);

/// Shows image files one at a time, Left and Right switch between them.
#[derive(Parser, Debug)]
#[command(name = "showimage", version)]
struct Args {
    /// Open the window fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Images to show
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Shuts SDL down once everything borrowed from it has been dropped.
struct QuitOnDrop;

impl Drop for QuitOnDrop {
    fn drop(&mut self) {
        sdl::quit();
    }
}

fn max_size(sizes: impl IntoIterator<Item = Point>) -> Point {
    sizes.into_iter().fold(Point::new(0, 0), |max, size| {
        Point::new(max.x.max(size.x), max.y.max(size.y))
    })
}

fn previous(current: usize, len: usize) -> usize {
    if current == 0 { len - 1 } else { current - 1 }
}

fn next(current: usize, len: usize) -> usize {
    (current + 1) % len
}

fn load_images(files: &[PathBuf]) -> Result<Vec<Surface>> {
    files
        .iter()
        .map(|path| sdl_image::load(path).with_context(|| format!("open {}", path.display())))
        .collect()
}

fn main_loop(renderer: &sdl::Renderer, textures: &[Texture]) -> Result<()> {
    let mut current = 0;
    loop {
        while let Some(event) = event::poll_event() {
            match event {
                Event::Quit(_) => {
                    info!("quit");
                    return Ok(());
                }
                Event::Keyboard(key) if key.pressed => {
                    debug!("key {:?}", key.keysym.code.name());
                    match key.keysym.code {
                        Code::ESCAPE => return Ok(()),
                        Code::LEFT => current = previous(current, textures.len()),
                        Code::RIGHT => current = next(current, textures.len()),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        renderer.clear()?;
        renderer.copy(&textures[current], None, None)?;
        renderer.present();

        thread::sleep(FRAME_TIME);
    }
}

fn run(args: &Args) -> Result<()> {
    sdl::init(InitFlags::VIDEO).context("failed to initialize SDL")?;
    let _quit = QuitOnDrop;

    let surfaces = load_images(&args.files)?;
    let size = max_size(surfaces.iter().map(Surface::size));
    info!(
        "loaded {} image(s), window size {}x{}",
        surfaces.len(),
        size.x,
        size.y
    );

    let mut flags = WindowFlags::empty();
    if args.fullscreen {
        flags |= WindowFlags::FULLSCREEN;
    }
    let title = args.files[0].to_string_lossy();
    let window = Window::new(
        &title,
        Rect::new(WINDOWPOS_UNDEFINED, WINDOWPOS_UNDEFINED, size.x, size.y),
        flags,
    )
    .context("failed to create window")?;
    let renderer = window
        .create_renderer(-1, RendererFlags::empty())
        .context("failed to create renderer")?;

    let textures = surfaces
        .iter()
        .map(|surface| surface.to_texture(&renderer))
        .collect::<sdl::Result<Vec<_>>>()
        .context("failed to create texture")?;

    main_loop(&renderer, &textures)
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = main_thread::main(move || {
        main_thread::call(move || run(&args)).unwrap_or_else(|err| Err(err.into()))
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fits_every_image() {
        let sizes = [Point::new(640, 100), Point::new(20, 480), Point::new(300, 300)];
        assert_eq!(max_size(sizes), Point::new(640, 480));
        assert_eq!(max_size([]), Point::new(0, 0));
    }

    #[test]
    fn arrows_wrap_around() {
        assert_eq!(previous(0, 3), 2);
        assert_eq!(previous(2, 3), 1);
        assert_eq!(next(2, 3), 0);
        assert_eq!(next(0, 1), 0);
    }

    #[test]
    fn files_are_required() {
        let err = Args::try_parse_from(["showimage", "--fullscreen"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let args = Args::try_parse_from(["showimage", "--fullscreen", "a.png", "b.jpg"]).unwrap();
        assert!(args.fullscreen);
        assert_eq!(args.files, [PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
    }
}
