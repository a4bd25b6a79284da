use anyhow::{Context, Result};
use clap::Parser;
use shapepad::shapes::{Arc, Circle, Rect, Triangle};
use shapepad::{Canvas, Config};
use std::fs;
use std::path::PathBuf;

/// Teaching canvas that draws simple shapes and exports PNG snapshots
#[derive(Parser, Debug)]
#[command(name = "shapepad", version, about)]
struct Args {
    /// Run without a presentation surface
    #[arg(long)]
    headless: bool,

    /// Write the finished picture to this PNG path
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Write the finished picture to the configured export directory
    #[arg(long)]
    save: bool,

    /// Override the canvas title
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let mut options = config.canvas_options();
    if args.headless {
        options.headless = true;
    }
    if let Some(title) = &args.title {
        options.title = title.clone();
    }

    let canvas = Canvas::shared(options);
    canvas.set_visible(true);

    // Build the whole picture in one batch so viewers never see it
    // half-assembled.
    canvas.pause(true);

    let mut wall = Rect::new(&canvas);
    wall.move_horizontal(-140);
    wall.move_vertical(20);
    wall.change_size(120);
    wall.make_visible();

    let mut window = Rect::new(&canvas);
    window.change_color("black");
    window.move_horizontal(-120);
    window.move_vertical(40);
    window.change_size(40);
    window.make_visible();

    let mut roof = Triangle::new(&canvas);
    roof.change_size(60, 180);
    roof.move_horizontal(20);
    roof.move_vertical(-60);
    roof.make_visible();

    let mut sun = Circle::new(&canvas);
    sun.change_color("yellow");
    sun.move_horizontal(100);
    sun.move_vertical(-40);
    sun.change_size(80);
    sun.make_visible();

    let smile = Arc::with_geometry(&canvas, 280, 70, 40, 200, 340, "red", true);

    canvas.pause(false);
    // Resuming does not repaint on its own.
    canvas.redraw();

    log::info!("picture assembled: {smile}");

    let destination = if let Some(path) = args.export {
        Some(path)
    } else if args.save {
        Some(config.export.default_destination())
    } else {
        None
    };

    if let Some(destination) = destination {
        if let Some(parent) = destination.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create export directory {}", parent.display())
            })?;
        }
        canvas
            .save_to_file(&destination)
            .with_context(|| format!("failed to export picture to {}", destination.display()))?;
        println!("Saved picture to {}", destination.display());
    }

    Ok(())
}
