pub const DEFAULT_SCALE_FACTOR: f64 = 1.6;
pub const DEFAULT_OFFSET_X_PCT: f64 = 0.05;
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Parameters for a single pad operation.
///
/// `scale_factor` sizes the square canvas relative to the longest source edge;
/// `offset_x_pct` shifts the source right by that fraction of its own width
/// (negative shifts left). Neither is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadConfig {
    pub scale_factor: f64,
    pub offset_x_pct: f64,
    pub background: [u8; 4],
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            offset_x_pct: DEFAULT_OFFSET_X_PCT,
            background: WHITE,
        }
    }
}

impl PadConfig {
    pub fn new(scale_factor: f64, offset_x_pct: f64) -> Self {
        Self {
            scale_factor,
            offset_x_pct,
            ..Default::default()
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_offset_x_pct(mut self, offset_x_pct: f64) -> Self {
        self.offset_x_pct = offset_x_pct;
        self
    }

    pub fn with_background(mut self, background: [u8; 4]) -> Self {
        self.background = background;
        self
    }
}
