//! Camera capture port and the canned skin check.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::chat::Conversation;
use crate::responses::{SKIN_ANALYSIS_RESPONSE, SKIN_UPLOAD_MESSAGE};

/// Message shown when the camera cannot be opened.
pub const CAMERA_UNAVAILABLE_MESSAGE: &str = "Unable to access camera. Please check permissions.";

/// Capture errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("No camera available")]
    Unavailable,

    #[error("Capture cancelled")]
    Cancelled,

    #[error("Capture failed: {0}")]
    Device(String),
}

impl CaptureError {
    /// Blocking alert text for the user. `None` when the user cancelled.
    pub fn alert(&self) -> Option<&'static str> {
        match self {
            CaptureError::Cancelled => None,
            _ => Some(CAMERA_UNAVAILABLE_MESSAGE),
        }
    }
}

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Which camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Rear camera ("environment")
    Environment,
    /// Front camera
    User,
}

/// A single JPEG-encoded still frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

impl Frame {
    /// `data:image/jpeg;base64,...` URL of the frame.
    pub fn to_data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", STANDARD.encode(&self.jpeg))
    }
}

/// Source of camera frames.
pub trait CaptureDevice {
    /// Open the camera facing `facing` and grab one frame.
    fn capture(&mut self, facing: Facing) -> CaptureResult<Frame>;
}

/// Capture a rear-camera frame and append the canned analysis.
///
/// The frame is encoded and dropped without being stored or sent. On error
/// the conversation is left unchanged.
pub fn run_skin_check<D: CaptureDevice + ?Sized>(
    device: &mut D,
    conversation: &mut Conversation,
) -> CaptureResult<&'static str> {
    let frame = device.capture(Facing::Environment).map_err(|e| {
        tracing::warn!(error = %e, "skin check capture failed");
        e
    })?;

    let data_url = frame.to_data_url();
    tracing::debug!(
        width = frame.width,
        height = frame.height,
        encoded_len = data_url.len(),
        "skin image captured"
    );
    drop(data_url);

    conversation.push_exchange(SKIN_UPLOAD_MESSAGE, SKIN_ANALYSIS_RESPONSE);
    Ok(SKIN_ANALYSIS_RESPONSE)
}
