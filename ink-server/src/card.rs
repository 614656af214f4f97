//! The 212x104 stats card.
//!
//! Layout mirrors a pHAT e-ink panel: the year on top, a rule, three columns
//! (runs, rides, swims) with count and miles, and a closing rule.

use ink_stats::{
    mode::{Mode, Rgb},
    stats::{Activity, YtdStats},
    units::format_distance,
};
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{
    register_font,
    text_anchor::{HPos, Pos, VPos},
    FontStyle,
};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;

pub const CARD_WIDTH: u32 = 212;
pub const CARD_HEIGHT: u32 = 104;

/// Left edge of the run, ride and swim columns.
const COLUMNS: [i32; 3] = [4, 80, 160];

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Failed to read font {path}: {source}")]
    FontIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid font: {0}")]
    InvalidFont(String),

    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("Frame buffer holds {actual} bytes, expected {expected}")]
    #[cfg_attr(not(feature = "inky"), allow(dead_code))]
    FrameSize { expected: usize, actual: usize },

    #[error("Card I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Font face; each is registered with plotters under its own family name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Bold,
    Light,
    Regular,
}

impl Weight {
    pub const ALL: [Weight; 3] = [Weight::Bold, Weight::Light, Weight::Regular];

    pub fn family(self) -> &'static str {
        match self {
            Weight::Bold => "roboto-bold",
            Weight::Light => "roboto-light",
            Weight::Regular => "roboto-regular",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Weight::Bold => "Roboto-Bold.ttf",
            Weight::Light => "Roboto-Light.ttf",
            Weight::Regular => "Roboto-Regular.ttf",
        }
    }
}

/// A piece of text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct CardText {
    pub text: String,
    pub position: (i32, i32),
    pub weight: Weight,
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRule {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub width: u32,
}

pub const RULES: [CardRule; 2] = [
    CardRule {
        from: (1, 16),
        to: (210, 16),
        width: 2,
    },
    CardRule {
        from: (2, 99),
        to: (210, 99),
        width: 2,
    },
];

/// Every text element on the card, in drawing order.
pub fn card_texts(stats: &YtdStats) -> Vec<CardText> {
    let mut texts = vec![CardText {
        text: stats.year.to_string(),
        position: (4, 1),
        weight: Weight::Bold,
        size: 11,
    }];
    for (activity, x) in Activity::ALL.into_iter().zip(COLUMNS) {
        let totals = stats.totals(activity);
        texts.push(CardText {
            text: activity.label().to_string(),
            position: (x, 26),
            weight: Weight::Bold,
            size: 12,
        });
        texts.push(CardText {
            text: totals.count.to_string(),
            position: (x, 43),
            weight: Weight::Light,
            size: 12,
        });
        texts.push(CardText {
            text: format_distance(totals.distance),
            position: (x, 63),
            weight: Weight::Regular,
            size: 22,
        });
    }
    texts
}

/// Load the Roboto faces from `font_dir` and register them with plotters.
pub fn register_fonts(font_dir: &Path) -> Result<(), CardError> {
    for weight in Weight::ALL {
        register_font_file(weight, &font_dir.join(weight.file_name()))?;
    }
    info!("Registered card fonts from {}", font_dir.display());
    Ok(())
}

/// Register a single font file as the face used for `weight`.
pub fn register_font_file(weight: Weight, path: &Path) -> Result<(), CardError> {
    let bytes = fs::read(path).map_err(|source| CardError::FontIo {
        path: path.to_path_buf(),
        source,
    })?;
    // plotters holds on to registered fonts for the life of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(weight.family(), FontStyle::Normal, bytes)
        .map_err(|_| CardError::InvalidFont(path.display().to_string()))
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn draw_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> CardError {
    CardError::Draw(e.to_string())
}

fn draw_card<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    stats: &YtdStats,
    mode: Mode,
) -> Result<(), CardError> {
    let palette = mode.palette();
    let background = color(palette.background);
    let foreground = color(palette.text);

    root.fill(&background).map_err(draw_error)?;

    for rule in RULES {
        root.draw(&PathElement::new(
            vec![rule.from, rule.to],
            foreground.stroke_width(rule.width),
        ))
        .map_err(draw_error)?;
    }

    let anchor = Pos::new(HPos::Left, VPos::Top);
    for item in card_texts(stats) {
        let style = (item.weight.family(), item.size as f64)
            .into_font()
            .color(&foreground)
            .pos(anchor);
        root.draw(&Text::new(item.text, item.position, style))
            .map_err(draw_error)?;
    }

    root.present().map_err(draw_error)
}

/// Draw the card into a row-major RGB buffer, three bytes per pixel.
#[cfg_attr(not(feature = "inky"), allow(dead_code))]
pub fn render_rgb(stats: &YtdStats, mode: Mode) -> Result<Vec<u8>, CardError> {
    let mut buffer = vec![0u8; (CARD_WIDTH * CARD_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (CARD_WIDTH, CARD_HEIGHT)).into_drawing_area();
        draw_card(&root, stats, mode)?;
    }
    Ok(buffer)
}

/// Draw the card for `stats` and write it as a PNG to `path`.
///
/// The image is drawn into a temporary file next to `path` and renamed over
/// it, so the file served under `/static` is always a complete PNG.
pub fn render_png(stats: &YtdStats, mode: Mode, path: &Path) -> Result<(), CardError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // plotters picks the encoder from the extension, so keep `.png`.
    let staged = tempfile::Builder::new()
        .prefix(".stats-")
        .suffix(".png")
        .tempfile_in(dir)?;
    {
        let root = BitMapBackend::new(staged.path(), (CARD_WIDTH, CARD_HEIGHT)).into_drawing_area();
        draw_card(&root, stats, mode)?;
    }
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Where a freshly drawn card goes.
pub trait CardSink: Send + Sync {
    fn publish(&self, stats: &YtdStats, mode: Mode) -> Result<(), CardError>;
}

/// Writes the card as a PNG, served to the dashboard under `/static`.
#[derive(Debug, Clone)]
pub struct PngCard {
    path: PathBuf,
}

impl PngCard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CardSink for PngCard {
    fn publish(&self, stats: &YtdStats, mode: Mode) -> Result<(), CardError> {
        render_png(stats, mode, &self.path)?;
        info!("Wrote {:?} card to {}", mode, self.path.display());
        Ok(())
    }
}

/// Publishes to several sinks in order, stopping at the first failure.
#[derive(Clone, Default)]
pub struct CardSinks(Vec<Arc<dyn CardSink>>);

impl CardSinks {
    pub fn new(sinks: Vec<Arc<dyn CardSink>>) -> Self {
        Self(sinks)
    }
}

impl CardSink for CardSinks {
    fn publish(&self, stats: &YtdStats, mode: Mode) -> Result<(), CardError> {
        for sink in &self.0 {
            sink.publish(stats, mode)?;
        }
        Ok(())
    }
}
