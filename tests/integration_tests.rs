// Integration tests for img2icon
use image::{Rgba, RgbaImage};
use img2icon::output::{can_write, icon_file_name, placeholder_file_name, write_png};
use img2icon::{decode, generate_icon, generate_placeholder, IconOptions, PlaceholderOptions};
use std::fs;
use std::path::{Path, PathBuf};

// Create a simple test image programmatically
fn create_test_png(path: &Path, width: u32, height: u32, pattern: &str) {
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let (r, g, b, a) = match pattern {
                "bordered" => {
                    // Red content inside a 2px blue border.
                    let inside = x >= 2 && x < width - 2 && y >= 2 && y < height - 2;
                    if inside { (255, 0, 0, 255) } else { (0, 0, 255, 255) }
                }
                "white-frame" => {
                    // Red content inside a 1px white frame.
                    let inside = x >= 1 && x < width - 1 && y >= 1 && y < height - 1;
                    if inside { (255, 0, 0, 255) } else { (255, 255, 255, 255) }
                }
                "solid" => (128, 128, 128, 255),
                _ => (255, 255, 255, 255),
            };
            img.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }

    img.save(path).expect("Failed to save test image");
}

fn load_png(path: &Path) -> RgbaImage {
    image::open(path).expect("Failed to load output").to_rgba8()
}

#[test]
fn test_icon_pipeline_auto_background() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bordered.png");
    create_test_png(&input, 12, 12, "bordered");

    let img = decode(&input).expect("Failed to decode");
    assert_eq!((img.width, img.height), (12, 12));

    let options = IconOptions {
        size: 64,
        background: "auto".into(),
        trim: String::new(),
        padding: 10,
        ..Default::default()
    };
    let icon = generate_icon(&options, &img).expect("Failed to generate icon");
    assert_eq!(icon.dimensions(), (64, 64));

    let out = dir.path().join(icon_file_name(&input, options.size, options.padding));
    write_png(icon, &out, 0).expect("Failed to write icon");
    assert_eq!(out.file_name().unwrap(), "bordered.64pc10.png");

    let written = load_png(&out);
    // The uniform blue border becomes the canvas background.
    assert_eq!(*written.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    assert_eq!(*written.get_pixel(63, 63), Rgba([0, 0, 255, 255]));
    // The composited content keeps its red interior.
    assert_eq!(*written.get_pixel(32, 32), Rgba([255, 0, 0, 255]));
}

#[test]
fn test_icon_pipeline_trim_and_fixed_background() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("framed.png");
    create_test_png(&input, 10, 10, "white-frame");

    let img = decode(&input).expect("Failed to decode");
    let options = IconOptions {
        size: 100,
        background: "#00ff00".into(),
        trim: "white".into(),
        padding: 10,
        ..Default::default()
    };
    let icon = generate_icon(&options, &img).expect("Failed to generate icon");

    // The white frame trims away, so the red content fills the padded
    // 80x80 area with the green background around it.
    assert_eq!(*icon.get_pixel(50, 50), Rgba([255, 0, 0, 255]));
    assert_eq!(*icon.get_pixel(12, 50), Rgba([255, 0, 0, 255]));
    assert_eq!(*icon.get_pixel(5, 50), Rgba([0, 255, 0, 255]));
    assert_eq!(*icon.get_pixel(5, 5), Rgba([0, 255, 0, 255]));
}

#[test]
fn test_icon_pipeline_transparent_background_survives_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("solid.png");
    create_test_png(&input, 10, 10, "solid");

    let img = decode(&input).expect("Failed to decode");
    let options = IconOptions {
        size: 40,
        background: "transparent".into(),
        trim: String::new(),
        padding: 25,
        ..Default::default()
    };
    let icon = generate_icon(&options, &img).expect("Failed to generate icon");

    let out = dir.path().join(icon_file_name(&input, options.size, options.padding));
    write_png(icon, &out, 0).expect("Failed to write icon");

    let written = load_png(&out);
    assert_eq!(written.get_pixel(1, 1)[3], 0, "padding should stay transparent");
    assert_eq!(*written.get_pixel(20, 20), Rgba([128, 128, 128, 255]));
}

#[test]
fn test_output_rounding_clears_icon_corners() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("solid.png");
    create_test_png(&input, 10, 10, "solid");

    let img = decode(&input).expect("Failed to decode");
    let options = IconOptions {
        size: 60,
        background: "#ff0000".into(),
        trim: String::new(),
        padding: 0,
        ..Default::default()
    };
    let icon = generate_icon(&options, &img).expect("Failed to generate icon");

    let out = dir.path().join("rounded.png");
    write_png(icon, &out, 50).expect("Failed to write icon");

    let written = load_png(&out);
    assert_eq!(written.get_pixel(0, 0)[3], 0, "corner should be cleared");
    assert_eq!(written.get_pixel(59, 0)[3], 0);
    assert_eq!(*written.get_pixel(30, 30), Rgba([128, 128, 128, 255]));
}

#[test]
fn test_placeholder_tile_without_text() {
    let dir = tempfile::tempdir().unwrap();
    let options = PlaceholderOptions {
        width: 300,
        height: 200,
        background: "#2196f3".into(),
        text: "<none>".into(),
        ..Default::default()
    };
    let tile = generate_placeholder(&options, None).expect("Failed to generate placeholder");
    assert_eq!(tile.dimensions(), (300, 200));

    let out = dir.path().join(placeholder_file_name("", 300, 200, options.padding));
    write_png(tile, &out, 0).expect("Failed to write placeholder");
    assert_eq!(out.file_name().unwrap(), "300x200pc10.png");

    let written = load_png(&out);
    assert!(written.pixels().all(|&p| p == Rgba([0x21, 0x96, 0xf3, 255])));
}

#[test]
fn test_placeholder_random_background_is_opaque() {
    let options = PlaceholderOptions {
        width: 50,
        height: 40,
        background: "auto".into(),
        text: "<none>".into(),
        ..Default::default()
    };
    let tile = generate_placeholder(&options, None).expect("Failed to generate placeholder");
    // The random design color is unpredictable but always opaque and
    // uniform.
    let first = *tile.get_pixel(0, 0);
    assert_eq!(first[3], 255);
    assert!(tile.pixels().all(|&p| p == first));
}

#[test]
fn test_overwrite_check_protects_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("icon.png");

    let first = RgbaImage::from_pixel(4, 4, Rgba([1, 1, 1, 255]));
    write_png(first, &out, 0).expect("Failed to write");

    // Without the overwrite flag the existing file must survive.
    assert!(!can_write(&out, false));
    assert_eq!(*load_png(&out).get_pixel(0, 0), Rgba([1, 1, 1, 255]));

    assert!(can_write(&out, true));
    let second = RgbaImage::from_pixel(4, 4, Rgba([2, 2, 2, 255]));
    write_png(second, &out, 0).expect("Failed to overwrite");
    assert_eq!(*load_png(&out).get_pixel(0, 0), Rgba([2, 2, 2, 255]));
}

#[test]
fn test_undecodable_input_does_not_affect_others() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.png");
    fs::write(&broken, b"not a png at all").unwrap();
    let good = dir.path().join("good.png");
    create_test_png(&good, 10, 10, "solid");

    assert!(decode(&broken).is_err());

    // The bad file is skipped; the good one still processes end to end.
    let img = decode(&good).expect("Failed to decode");
    let options = IconOptions { size: 32, ..Default::default() };
    let icon = generate_icon(&options, &img).expect("Failed to generate icon");
    assert_eq!(icon.dimensions(), (32, 32));
}

#[test]
fn test_batch_over_directory_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    for name in ["a.png", "b.png"] {
        create_test_png(&dir.path().join(name), 10, 10, "bordered");
    }

    let files = img2icon::collect_files(dir.path());
    assert_eq!(files.len(), 2);

    let options = IconOptions { size: 48, ..Default::default() };
    let mut outputs: Vec<PathBuf> = Vec::new();
    for path in &files {
        let img = decode(path).expect("Failed to decode");
        let icon = generate_icon(&options, &img).expect("Failed to generate icon");
        let out = out_dir
            .path()
            .join(icon_file_name(path, options.size, options.padding));
        write_png(icon, &out, 0).expect("Failed to write icon");
        outputs.push(out);
    }

    assert!(outputs.iter().all(|p| p.exists()));
    assert_eq!(outputs[0].file_name().unwrap(), "a.48pc10.png");
    assert_eq!(outputs[1].file_name().unwrap(), "b.48pc10.png");
}
