// src/icon.rs

/// One entry of the app icon set: a logical size in points and a display scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    pub logical_size: f64,
    pub scale: u32,
}

impl IconSpec {
    pub const fn new(logical_size: f64, scale: u32) -> Self {
        Self {
            logical_size,
            scale,
        }
    }

    /// Side length of the square image in pixels, never below 1.
    pub fn pixel_dimension(&self) -> u32 {
        (self.logical_size * f64::from(self.scale)).round().max(1.0) as u32
    }

    /// `icon_{size}pt@{scale}x.png`; integral sizes print without a fraction.
    pub fn filename(&self) -> String {
        format!("icon_{}pt@{}x.png", self.logical_size, self.scale)
    }
}

/// Every size Xcode asks for in an iPhone + iPad + App Store icon set.
pub const ICON_SPECS: [IconSpec; 12] = [
    IconSpec::new(20.0, 2),
    IconSpec::new(20.0, 3),
    IconSpec::new(29.0, 2),
    IconSpec::new(29.0, 3),
    IconSpec::new(40.0, 2),
    IconSpec::new(40.0, 3),
    IconSpec::new(60.0, 2),
    IconSpec::new(60.0, 3),
    IconSpec::new(76.0, 1), // iPad
    IconSpec::new(76.0, 2), // iPad
    IconSpec::new(83.5, 2), // iPad Pro
    IconSpec::new(1024.0, 1), // App Store
];

/// A file the driver has written, kept for the closing summary.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIconRecord {
    pub logical_size: f64,
    pub scale: u32,
    pub filename: String,
}

impl From<&IconSpec> for GeneratedIconRecord {
    fn from(spec: &IconSpec) -> Self {
        Self {
            logical_size: spec.logical_size,
            scale: spec.scale,
            filename: spec.filename(),
        }
    }
}
