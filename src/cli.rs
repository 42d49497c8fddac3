use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2icon")]
#[command(about = "Generate icons and placeholders from images")]
#[command(version)]
pub struct Cli {
    /// Input image files, directories, or WxH placeholder sizes
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output directory name
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Overwrite output if exists
    #[arg(short = 'w', long)]
    pub overwrite: bool,

    /// Size of the output image
    #[arg(short, long, default_value = "200")]
    pub size: u32,

    /// Background color ['transparent', 'auto', 'auto,fallback', hex, design name, svg 1.1 name]
    #[arg(short, long, default_value = "auto,#f1f5f9")]
    pub bg: String,

    /// Comma-separated list of colors to trim when processing an image
    #[arg(long, default_value = "transparent")]
    pub trim: String,

    /// Padding of the icon image (by % of the size)
    #[arg(short, long, default_value = "10")]
    pub padding: u32,

    /// Round the output image (by % of the size)
    #[arg(short, long, default_value = "0")]
    pub round: u32,

    /// Round the source image (by % of the size)
    #[arg(long, default_value = "0")]
    pub src_round: u32,

    /// Additional padding on the x axis (by % of the size)
    #[arg(long = "padx", default_value = "0", allow_hyphen_values = true)]
    pub pad_x: i32,

    /// Additional padding on the y axis (by % of the size)
    #[arg(long = "pady", default_value = "0", allow_hyphen_values = true)]
    pub pad_y: i32,

    /// Placeholder text; '<none>' renders no text, a trailing '<color>' sets the text color
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Path to a TTF/OTF font used for placeholder text
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
