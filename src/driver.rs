// src/driver.rs
use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::icon::{GeneratedIconRecord, IconSpec, ICON_SPECS};
use crate::render::render_icon;
use image::RgbImage;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Check that the imaging backend can write PNG files by encoding a 1x1 image.
pub fn probe_png_encoder() -> Result<()> {
    let mut sink = Cursor::new(Vec::new());
    RgbImage::new(1, 1)
        .encode_png(&mut sink)
        .map_err(|err| Error::MissingCapability {
            dependency: "image (png codec)",
            hint: "Rebuild with the `png` feature of the `image` crate enabled.",
            detail: err.to_string(),
        })
}

/// Generate every icon in the table into `config.output_dir`.
///
/// Existing files with the same names are overwritten.
pub fn run(config: &Config) -> Result<Vec<GeneratedIconRecord>> {
    probe_png_encoder()?;

    let dir = config.output_dir.as_path();
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!("writing icons to {}", dir.display());

    println!("🎨 Generating Hedaya app icons...");
    println!();

    let mut generated = Vec::with_capacity(ICON_SPECS.len());
    for spec in ICON_SPECS.iter() {
        generated.push(generate_icon(spec, dir)?);
    }

    print_summary(&generated);
    Ok(generated)
}

fn generate_icon(spec: &IconSpec, dir: &Path) -> Result<GeneratedIconRecord> {
    let record = GeneratedIconRecord::from(spec);
    let px = spec.pixel_dimension();
    println!("  Creating {} ({}x{})...", record.filename, px, px);

    let img = render_icon(spec.logical_size, spec.scale);
    let path = dir.join(&record.filename);
    write_png(&img, &path).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    debug!("wrote {} ({} bytes raw)", path.display(), img.as_raw().len());

    Ok(record)
}

fn write_png<C: Canvas>(canvas: &C, path: &Path) -> image::ImageResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    canvas.encode_png(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// The icon table as `filename  WxH` lines, in generation order.
pub fn list_lines() -> Vec<String> {
    ICON_SPECS
        .iter()
        .map(|spec| {
            let px = spec.pixel_dimension();
            format!("{:<22} {}x{}", spec.filename(), px, px)
        })
        .collect()
}

/// Print the icon table without rendering anything.
pub fn list() {
    for line in list_lines() {
        println!("{}", line);
    }
}

fn print_summary(generated: &[GeneratedIconRecord]) {
    println!();
    println!("✅ Icons generated successfully!");
    println!();
    println!("Generated files:");
    for record in generated {
        debug!("{}pt @{}x -> {}", record.logical_size, record.scale, record.filename);
        println!("  - {}", record.filename);
    }

    println!();
    println!("📱 Next steps:");
    println!("  1. Open Hedaya.xcodeproj in Xcode");
    println!("  2. Go to Assets.xcassets → AppIcon");
    println!("  3. Drag the generated icons to their respective slots");
    println!();
    println!("Or the icons are ready to use in the AppIcon.appiconset folder!");
}
