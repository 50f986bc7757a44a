//! Screen-capture-to-image convenience helpers.
//!
//! The environment supplies display frames through [`FrameSource`]; this
//! module polls for a usable frame within a bounded interval, validates it
//! and encodes a single still as a PNG data URL suitable for a step image.
//! No store state is touched here; on success the caller feeds the URL
//! through the normal step form path.

use std::io::Cursor;
use std::thread;
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::domain::types::{ImageUrl, TypeConstraintError};

/// How long to wait for the source to deliver a usable frame.
pub const DEFAULT_FRAME_TIMEOUT: Duration = Duration::from_secs(7);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Categorized capture faults reported to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The user or environment denied access to the display.
    #[error("screen capture permission was denied")]
    PermissionDenied,
    /// No usable frame arrived within the bounded interval.
    #[error("screen capture timed out")]
    TimedOut,
    /// The capture was cancelled or no video source was selected.
    #[error("capture was cancelled or no video source was selected")]
    NoSource,
    /// The environment offers no capture capability at all.
    #[error("screen capture is not supported in this environment")]
    Unsupported,
    /// A frame arrived but could not be turned into an image.
    #[error("captured frame was unusable: {0}")]
    BadFrame(String),
}

/// A single decoded RGBA frame delivered by a capture source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Environment-provided source of display frames.
pub trait FrameSource {
    /// Polls for the next available frame. `Ok(None)` means no frame is
    /// ready yet; faults map onto the [`CaptureError`] taxonomy.
    fn poll_frame(&mut self) -> Result<Option<Frame>, CaptureError>;
}

/// A captured still image, PNG-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedStill {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl CapturedStill {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The PNG bytes of the still.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Renders the still as a `data:image/png;base64` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }

    /// The still as a step image URL.
    pub fn to_image_url(&self) -> Result<ImageUrl, TypeConstraintError> {
        ImageUrl::new(self.to_data_url())
    }
}

/// Waits up to `timeout` for a usable frame and extracts a single still.
pub fn capture_still(
    source: &mut dyn FrameSource,
    timeout: Duration,
) -> Result<CapturedStill, CaptureError> {
    let deadline = Instant::now() + timeout;
    loop {
        match source.poll_frame()? {
            Some(frame) => return encode_frame(frame),
            None if Instant::now() >= deadline => return Err(CaptureError::TimedOut),
            None => thread::sleep(POLL_INTERVAL),
        }
    }
}

fn encode_frame(frame: Frame) -> Result<CapturedStill, CaptureError> {
    if frame.width == 0 || frame.height == 0 {
        // The selected source might be invalid or protected.
        return Err(CaptureError::BadFrame(
            "video dimensions not available".to_string(),
        ));
    }
    let width = frame.width;
    let height = frame.height;
    let image = RgbaImage::from_raw(width, height, frame.pixels).ok_or_else(|| {
        CaptureError::BadFrame("pixel buffer does not match frame dimensions".to_string())
    })?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| CaptureError::BadFrame(e.to_string()))?;
    Ok(CapturedStill { width, height, png })
}
