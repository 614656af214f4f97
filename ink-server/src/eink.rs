//! Output for the red/black/white pHAT e-ink panel.
//!
//! The panel is mounted upside down, so frames are turned half a turn, and
//! every pixel is snapped to the nearest of the panel's three inks.
#![cfg_attr(not(feature = "inky"), allow(dead_code))]

use crate::card::{render_rgb, CardError, CardSink, CARD_HEIGHT, CARD_WIDTH};
use ink_stats::{
    mode::{Mode, Rgb},
    stats::YtdStats,
};
use log::info;

const PIXELS: usize = (CARD_WIDTH * CARD_HEIGHT) as usize;

/// Bytes in one packed bit plane.
pub const PLANE_BYTES: usize = PIXELS.div_ceil(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    White,
    Black,
    Red,
}

impl Ink {
    /// Palette order of the panel driver.
    pub const PALETTE: [Ink; 3] = [Ink::White, Ink::Black, Ink::Red];

    pub fn rgb(self) -> Rgb {
        match self {
            Ink::White => (255, 255, 255),
            Ink::Black => (0, 0, 0),
            Ink::Red => (255, 0, 0),
        }
    }

    /// Closest ink by RGB distance; ties go to the earlier palette entry.
    pub fn nearest(rgb: Rgb) -> Ink {
        let mut best = Ink::White;
        let mut best_distance = u32::MAX;
        for ink in Ink::PALETTE {
            let distance = distance(rgb, ink.rgb());
            if distance < best_distance {
                best = ink;
                best_distance = distance;
            }
        }
        best
    }
}

fn distance(a: Rgb, b: Rgb) -> u32 {
    let channel = |x: u8, y: u8| {
        let d = x.abs_diff(y) as u32;
        d * d
    };
    channel(a.0, b.0) + channel(a.1, b.1) + channel(a.2, b.2)
}

/// A quantized card in panel orientation, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EinkFrame {
    pixels: Vec<Ink>,
}

impl EinkFrame {
    /// Quantize a row-major RGB card (see [`render_rgb`]) and rotate it 180°.
    pub fn from_rgb(rgb: &[u8]) -> Result<Self, CardError> {
        let expected = PIXELS * 3;
        if rgb.len() != expected {
            return Err(CardError::FrameSize {
                expected,
                actual: rgb.len(),
            });
        }
        let mut pixels: Vec<Ink> = rgb
            .chunks_exact(3)
            .map(|px| Ink::nearest((px[0], px[1], px[2])))
            .collect();
        // Reversing a row-major image is a half turn.
        pixels.reverse();
        Ok(Self { pixels })
    }

    pub fn render(stats: &YtdStats, mode: Mode) -> Result<Self, CardError> {
        Self::from_rgb(&render_rgb(stats, mode)?)
    }

    /// Ink at panel coordinates, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Ink> {
        if x >= CARD_WIDTH || y >= CARD_HEIGHT {
            return None;
        }
        self.pixels.get((y * CARD_WIDTH + x) as usize).copied()
    }

    /// Black and red bit planes, one bit per pixel, most significant bit first.
    /// White pixels are clear in both.
    pub fn planes(&self) -> (Vec<u8>, Vec<u8>) {
        let mut black = vec![0u8; PLANE_BYTES];
        let mut red = vec![0u8; PLANE_BYTES];
        for (i, ink) in self.pixels.iter().enumerate() {
            let bit = 0x80 >> (i % 8);
            match ink {
                Ink::Black => black[i / 8] |= bit,
                Ink::Red => red[i / 8] |= bit,
                Ink::White => {}
            }
        }
        (black, red)
    }
}

/// Hands a finished frame to the display.
pub trait PanelWriter: Send + Sync {
    fn write_frame(&self, frame: &EinkFrame) -> Result<(), CardError>;
}

/// Card sink that redraws the e-ink panel.
#[derive(Debug)]
pub struct EinkCard<W> {
    panel: W,
}

impl<W: PanelWriter> EinkCard<W> {
    pub fn new(panel: W) -> Self {
        Self { panel }
    }
}

impl<W: PanelWriter> CardSink for EinkCard<W> {
    fn publish(&self, stats: &YtdStats, mode: Mode) -> Result<(), CardError> {
        let frame = EinkFrame::render(stats, mode)?;
        self.panel.write_frame(&frame)?;
        info!("Sent {:?} card to the e-ink panel", mode);
        Ok(())
    }
}

#[cfg(feature = "inky")]
pub use device::DevicePanel;

#[cfg(feature = "inky")]
mod device {
    use super::{CardError, EinkFrame, PanelWriter};
    use std::{fs::OpenOptions, io::Write, path::PathBuf};

    /// Writes the black plane then the red plane to a panel device node.
    #[derive(Debug, Clone)]
    pub struct DevicePanel {
        device: PathBuf,
    }

    impl DevicePanel {
        pub fn new(device: impl Into<PathBuf>) -> Self {
            Self {
                device: device.into(),
            }
        }
    }

    impl PanelWriter for DevicePanel {
        fn write_frame(&self, frame: &EinkFrame) -> Result<(), CardError> {
            let (black, red) = frame.planes();
            let mut device = OpenOptions::new().write(true).open(&self.device)?;
            device.write_all(&black)?;
            device.write_all(&red)?;
            device.flush()?;
            Ok(())
        }
    }
}
