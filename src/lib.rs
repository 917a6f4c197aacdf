pub mod config;
pub mod error;
pub mod padder;

pub use config::{PadConfig, DEFAULT_OFFSET_X_PCT, DEFAULT_SCALE_FACTOR};
pub use error::{PadError, PadResult};
pub use padder::{
    canvas_side, pad, pad_file, pad_image, paste_with_alpha_mask, placement, PadOutcome,
    PaddedImage, Placement,
};
