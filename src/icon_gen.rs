use crate::{
    glyph::{draw_lotus, draw_zen_circle, LotusStyle},
    gradient::{radial_gradient, vertical_gradient, vertical_gradient3},
    manifest::{write_manifest, IconEntry, IconManifest, MANIFEST_FILENAME},
};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, DynamicImage, GrayImage, ImageBuffer, ImageEncoder, Luma, Pixel, Rgb, RgbImage,
    Rgba, RgbaImage,
};
use imageproc::filter::filter3x3;
use std::{
    fmt,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// 3x3 smoothing kernel, a heavy center tap over its eight neighbours
const SMOOTH_KERNEL: [i32; 9] = [1, 1, 1, 1, 5, 1, 1, 1, 1];

/// Sum of `SMOOTH_KERNEL`
const SMOOTH_SCALE: i32 = 13;

/// Mask value for pixels a glyph layer covers
const COVERED: Luma<u8> = Luma([255]);

/// Options for a generation run, filled in from the command line
#[derive(Debug)]
pub struct Options {
    pub output: PathBuf,
    pub set: IconSet,
    pub glyph_color: String,
    pub manifest: bool,
}

/// Which family of icons to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IconSet {
    /// Radial gradients with the eight-petal lotus
    Classic,
    /// Eased vertical gradients with curved petals, plus a notification icon
    Premium,
}

/// How the canvas is filled before anything is drawn on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Radial { inner: Rgb<u8>, outer: Rgb<u8> },
    Vertical { top: Rgb<u8>, bottom: Rgb<u8> },
    Vertical3 { top: Rgb<u8>, middle: Rgb<u8>, bottom: Rgb<u8> },
    Transparent,
}

/// PNG color type written for an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

/// A dotted enso around the lotus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZenCircle {
    /// Radius relative to the canvas size
    pub radius_scale: f32,
    pub alpha: u8,
}

/// Everything needed to draw and save one icon file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconTarget {
    pub filename: &'static str,
    pub size: u32,
    pub role: &'static str,
    pub background: Background,
    pub lotus: LotusStyle,
    /// Lotus size relative to the canvas size
    pub lotus_scale: f32,
    pub lotus_alpha: u8,
    pub zen_circle: Option<ZenCircle>,
    pub smooth: bool,
    pub color_mode: ColorMode,
}

const CLASSIC_ICON_BACKGROUND: Background = Background::Radial {
    inner: Rgb([94, 114, 228]),
    outer: Rgb([142, 84, 233]),
};

const CLASSIC_TARGETS: &[IconTarget] = &[
    IconTarget {
        filename: "icon.png",
        size: 1024,
        role: "Main app icon",
        background: CLASSIC_ICON_BACKGROUND,
        lotus: LotusStyle::Classic,
        lotus_scale: 0.6,
        lotus_alpha: 230,
        zen_circle: Some(ZenCircle {
            radius_scale: 0.45,
            alpha: 180,
        }),
        smooth: true,
        color_mode: ColorMode::Rgba,
    },
    IconTarget {
        filename: "adaptive-icon.png",
        size: 1024,
        role: "Android adaptive icon",
        background: CLASSIC_ICON_BACKGROUND,
        lotus: LotusStyle::Classic,
        lotus_scale: 0.6,
        lotus_alpha: 230,
        zen_circle: Some(ZenCircle {
            radius_scale: 0.45,
            alpha: 180,
        }),
        smooth: true,
        color_mode: ColorMode::Rgba,
    },
    IconTarget {
        filename: "splash-icon.png",
        size: 1024,
        role: "Splash screen",
        background: Background::Radial {
            inner: Rgb([124, 144, 255]),
            outer: Rgb([172, 114, 255]),
        },
        lotus: LotusStyle::Classic,
        lotus_scale: 0.3,
        lotus_alpha: 220,
        zen_circle: Some(ZenCircle {
            radius_scale: 0.4,
            alpha: 200,
        }),
        smooth: true,
        color_mode: ColorMode::Rgba,
    },
    IconTarget {
        filename: "favicon.png",
        size: 48,
        role: "Web favicon",
        background: Background::Radial {
            inner: Rgb([108, 128, 240]),
            outer: Rgb([156, 98, 240]),
        },
        lotus: LotusStyle::Classic,
        lotus_scale: 0.7,
        lotus_alpha: 255,
        zen_circle: None,
        smooth: false,
        color_mode: ColorMode::Rgba,
    },
];

const PREMIUM_TARGETS: &[IconTarget] = &[
    IconTarget {
        filename: "icon.png",
        size: 1024,
        role: "Main app icon",
        background: Background::Vertical3 {
            top: Rgb([58, 46, 120]),
            middle: Rgb([104, 86, 196]),
            bottom: Rgb([168, 128, 226]),
        },
        lotus: LotusStyle::Triple,
        lotus_scale: 0.55,
        lotus_alpha: 235,
        zen_circle: Some(ZenCircle {
            radius_scale: 0.44,
            alpha: 170,
        }),
        smooth: true,
        color_mode: ColorMode::Rgb,
    },
    IconTarget {
        filename: "adaptive-icon.png",
        size: 1024,
        role: "Android adaptive icon foreground",
        background: Background::Transparent,
        lotus: LotusStyle::Triple,
        lotus_scale: 0.45,
        lotus_alpha: 255,
        zen_circle: None,
        smooth: false,
        color_mode: ColorMode::Rgba,
    },
    IconTarget {
        filename: "splash-icon.png",
        size: 1024,
        role: "Splash screen",
        background: Background::Vertical3 {
            top: Rgb([112, 128, 236]),
            middle: Rgb([150, 130, 240]),
            bottom: Rgb([196, 170, 250]),
        },
        lotus: LotusStyle::Triple,
        lotus_scale: 0.35,
        lotus_alpha: 225,
        zen_circle: Some(ZenCircle {
            radius_scale: 0.38,
            alpha: 190,
        }),
        smooth: true,
        color_mode: ColorMode::Rgb,
    },
    IconTarget {
        filename: "favicon.png",
        size: 48,
        role: "Web favicon",
        background: Background::Vertical {
            top: Rgb([88, 76, 180]),
            bottom: Rgb([150, 110, 230]),
        },
        lotus: LotusStyle::Single,
        lotus_scale: 0.75,
        lotus_alpha: 255,
        zen_circle: None,
        smooth: true,
        color_mode: ColorMode::Rgb,
    },
    IconTarget {
        filename: "notification-icon.png",
        size: 96,
        role: "Android notification icon",
        background: Background::Transparent,
        lotus: LotusStyle::Single,
        lotus_scale: 0.7,
        lotus_alpha: 255,
        zen_circle: None,
        smooth: false,
        color_mode: ColorMode::Rgba,
    },
];

impl IconTarget {
    /// Canvas center, where both the lotus and the zen circle are anchored
    pub fn center(&self) -> (i32, i32) {
        ((self.size / 2) as i32, (self.size / 2) as i32)
    }

    /// Lotus size in pixels
    pub fn lotus_size(&self) -> u32 {
        (self.size as f32 * self.lotus_scale) as u32
    }

    /// Zen circle radius in pixels, if the target has one
    pub fn zen_radius(&self) -> Option<u32> {
        self.zen_circle
            .map(|zen| (self.size as f32 * zen.radius_scale) as u32)
    }
}

impl IconSet {
    /// The icon files this set writes, in generation order
    pub fn targets(self) -> &'static [IconTarget] {
        match self {
            IconSet::Classic => CLASSIC_TARGETS,
            IconSet::Premium => PREMIUM_TARGETS,
        }
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSet::Classic => write!(f, "classic"),
            IconSet::Premium => write!(f, "premium"),
        }
    }
}

impl Background {
    /// Fill a square RGBA canvas of `size` pixels
    pub fn render(&self, size: u32) -> RgbaImage {
        let gradient = match *self {
            Background::Radial { inner, outer } => radial_gradient(size, size, inner, outer),
            Background::Vertical { top, bottom } => vertical_gradient(size, size, top, bottom),
            Background::Vertical3 {
                top,
                middle,
                bottom,
            } => vertical_gradient3(size, size, top, middle, bottom),
            Background::Transparent => {
                return RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
            }
        };

        DynamicImage::ImageRgb8(gradient).to_rgba8()
    }
}

impl ColorMode {
    pub fn color_type(self) -> ColorType {
        match self {
            ColorMode::Rgb => ColorType::Rgb8,
            ColorMode::Rgba => ColorType::Rgba8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Rgb => "rgb",
            ColorMode::Rgba => "rgba",
        }
    }
}

pub fn generate_icons(options: &Options) -> Result<Vec<PathBuf>> {
    let glyph_color = parse_glyph_color(&options.glyph_color)?;

    // Ensure the output directory exists
    create_dir_all(&options.output).context("Can't create output directory")?;

    println!(
        "🎨 Generating Slow Spot meditation app icons ({} set)...",
        options.set
    );
    println!("{}", "=".repeat(50));

    let targets = options.set.targets();
    let mut manifest = IconManifest::new("lotus-icon-gen".to_string());
    let mut written = Vec::with_capacity(targets.len());

    for target in targets {
        let icon = render_icon(target, glyph_color);
        let output_path = options.output.join(target.filename);
        save_png(&icon, &output_path)?;

        println!(
            "✓ Generated {} ({}x{})",
            target.filename, target.size, target.size
        );
        log::info!("Wrote {}", output_path.display());

        manifest.add_image(IconEntry::new(
            target.filename.to_string(),
            target.size,
            target.role.to_string(),
            target.color_mode.as_str().to_string(),
        ));
        written.push(output_path);
    }

    if options.manifest {
        write_manifest(&options.output, &manifest)?;
        println!("✓ Generated {MANIFEST_FILENAME}");
    }

    println!("{}", "=".repeat(50));
    println!("✅ All icons generated successfully!");
    println!("\nGenerated icons:");
    for target in targets {
        println!(
            "  • {} ({}x{}) - {}",
            target.filename, target.size, target.size, target.role
        );
    }

    Ok(written)
}

/// Draw a single icon in memory
///
/// Layers are painted back to front: background, zen circle, lotus. The zen
/// circle never reaches the lotus in any target, so their order does not
/// change the result. Opaque icons are smoothed as RGB; the returned image
/// already has the target's color mode.
pub fn render_icon(target: &IconTarget, glyph_color: Rgb<u8>) -> DynamicImage {
    let center = target.center();

    log::debug!("Rendering {} with {:?}", target.filename, target.background);
    let mut canvas = target.background.render(target.size);

    if let (Some(zen), Some(radius)) = (target.zen_circle, target.zen_radius()) {
        paint_layer(&mut canvas, with_alpha(glyph_color, zen.alpha), |mask| {
            draw_zen_circle(mask, center, radius, COVERED)
        });
    }

    paint_layer(
        &mut canvas,
        with_alpha(glyph_color, target.lotus_alpha),
        |mask| draw_lotus(mask, target.lotus, center, target.lotus_size(), COVERED),
    );

    let image = DynamicImage::ImageRgba8(canvas);
    if target.background == Background::Transparent {
        return match target.color_mode {
            ColorMode::Rgba => image,
            ColorMode::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
        };
    }

    let mut rgb = image.to_rgb8();
    if target.smooth {
        log::debug!("Smoothing {}", target.filename);
        rgb = smooth(&rgb);
    }

    let rgb = DynamicImage::ImageRgb8(rgb);
    match target.color_mode {
        ColorMode::Rgb => rgb,
        ColorMode::Rgba => DynamicImage::ImageRgba8(rgb.to_rgba8()),
    }
}

/// Blend `color` once over every pixel that `draw` covers
///
/// Shapes are drawn opaque into a coverage mask first, so pixels the fill
/// routines visit more than once still get a single coat of `color`.
pub fn paint_layer<F>(canvas: &mut RgbaImage, color: Rgba<u8>, draw: F)
where
    F: FnOnce(&mut GrayImage),
{
    let mut mask = GrayImage::new(canvas.width(), canvas.height());
    draw(&mut mask);

    for (pixel, coverage) in canvas.pixels_mut().zip(mask.pixels()) {
        if coverage[0] > 0 {
            pixel.blend(&color);
        }
    }
}

/// Soften hard polygon and dot edges with a 3x3 weighted average
///
/// The one pixel border is copied unchanged; interior values are rounded.
pub fn smooth(image: &RgbImage) -> RgbImage {
    let sums = filter3x3::<Rgb<u8>, i32, i16>(image, &SMOOTH_KERNEL);
    let (width, height) = image.dimensions();

    ImageBuffer::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
            return *image.get_pixel(x, y);
        }

        let sum = sums.get_pixel(x, y);
        Rgb([0, 1, 2].map(|c| ((sum[c] as i32 + SMOOTH_SCALE / 2) / SMOOTH_SCALE) as u8))
    })
}

/// Parse a CSS color for the lotus and zen circle strokes
pub fn parse_glyph_color(color: &str) -> Result<Rgb<u8>> {
    match css_color::Srgb::from_str(color) {
        Ok(color) => Ok(Rgb([
            (color.red * 255.) as u8,
            (color.green * 255.) as u8,
            (color.blue * 255.) as u8,
        ])),
        Err(_) => anyhow::bail!("Invalid glyph color: {color}"),
    }
}

fn with_alpha(color: Rgb<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], alpha])
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    write_png(
        image.as_bytes(),
        &mut out_file,
        image.width(),
        image.height(),
        image.color(),
    )
    .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode image data as PNG with best compression
fn write_png<W: Write>(
    image_data: &[u8],
    w: W,
    width: u32,
    height: u32,
    color_type: ColorType,
) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, color_type)?;
    Ok(())
}
