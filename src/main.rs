mod cli;

use std::fs;
use std::path::Path;
use std::time::Instant;

use ab_glyph::FontArc;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use rayon::prelude::*;

use cli::Cli;
use img2icon::output::{can_write, icon_file_name, placeholder_file_name, write_png};
use img2icon::placeholder::NONE_TEXT;
use img2icon::{
    collect_files, decode, generate_icon, generate_placeholder, parse_placeholder_size,
    IconOptions, PlaceholderOptions,
};

// Probed for placeholder text when --font is not given.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    if !cli.out.exists() {
        fs::create_dir_all(&cli.out)
            .with_context(|| format!("creating output directory {}", cli.out.display()))?;
    }
    let font = load_font(&cli)?;

    // Placeholder sizes and image files process independently.
    let mut sizes = Vec::new();
    let mut files = Vec::new();
    for input in &cli.inputs {
        match parse_placeholder_size(input) {
            Some(dim) => sizes.push(dim),
            None => files.extend(collect_files(Path::new(input))),
        }
    }

    let start = Instant::now();
    files.par_iter().for_each(|path| process_icon(&cli, path));
    sizes
        .par_iter()
        .for_each(|&(w, h)| process_placeholder(&cli, font.as_ref(), w, h));
    info!("processing completed in {:.2?}", start.elapsed());
    Ok(())
}

fn init_logger(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Loads the font once; it is shared read-only across tasks. A missing
/// font only matters once a placeholder actually needs text.
fn load_font(cli: &Cli) -> Result<Option<FontArc>> {
    if let Some(path) = &cli.font {
        let bytes =
            fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        let font = FontArc::try_from_vec(bytes)
            .with_context(|| format!("parsing font {}", path.display()))?;
        return Ok(Some(font));
    }
    for candidate in FONT_CANDIDATES {
        if let Ok(bytes) = fs::read(candidate) {
            if let Ok(font) = FontArc::try_from_vec(bytes) {
                debug!("loaded font {candidate}");
                return Ok(Some(font));
            }
        }
    }
    Ok(None)
}

fn process_icon(cli: &Cli, path: &Path) {
    let out = cli.out.join(icon_file_name(path, cli.size, cli.padding));
    if !can_write(&out, cli.overwrite) {
        return;
    }

    let img = match decode(path) {
        Ok(img) => img,
        Err(err) => {
            error!("{err}, skipping");
            return;
        }
    };
    info!(
        "processing {} ({}x{}) bg={} size={}",
        path.display(),
        img.width,
        img.height,
        cli.bg,
        cli.size
    );

    let options = IconOptions {
        size: cli.size,
        background: cli.bg.clone(),
        trim: cli.trim.clone(),
        padding: cli.padding,
        src_round: cli.src_round,
        pad_x: cli.pad_x,
        pad_y: cli.pad_y,
    };
    let result = generate_icon(&options, &img)
        .and_then(|icon| write_png(icon, &out, cli.round));
    if let Err(err) = result {
        error!("{err}, skipping");
    }
}

fn process_placeholder(cli: &Cli, font: Option<&FontArc>, width: u32, height: u32) {
    // The file name keeps the raw text, color suffix included.
    let name_text = if cli.text == NONE_TEXT { "" } else { cli.text.as_str() };
    let out = cli
        .out
        .join(placeholder_file_name(name_text, width, height, cli.padding));
    if !can_write(&out, cli.overwrite) {
        return;
    }
    info!("processing {width}x{height} text={:?} bg={}", cli.text, cli.bg);

    let options = PlaceholderOptions {
        width,
        height,
        background: cli.bg.clone(),
        text: cli.text.clone(),
        padding: cli.padding,
        pad_x: cli.pad_x,
        pad_y: cli.pad_y,
    };
    let result = generate_placeholder(&options, font)
        .and_then(|tile| write_png(tile, &out, cli.round));
    if let Err(err) = result {
        error!("{err}, skipping {width}x{height}");
    }
}
