/// The playing area. Width and height are in court units; the renderer scales
/// them to whatever surface it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Court {
    pub width: u32,
    pub height: u32,
    /// Gap between a paddle's resting line and the wall behind it.
    pub inset: u32,
}

impl Court {
    pub fn new(width: u32, height: u32, inset: u32) -> Self {
        Self {
            width,
            height,
            inset,
        }
    }

    pub fn width_f(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f(&self) -> f64 {
        f64::from(self.height)
    }

    pub fn inset_f(&self) -> f64 {
        f64::from(self.inset)
    }

    /// Horizontal coordinate that centres an object of the given width.
    pub fn centered_x(&self, object_width: f64) -> f64 {
        self.width_f() / 2.0 - object_width / 2.0
    }

    pub fn centered_y(&self, object_height: f64) -> f64 {
        self.height_f() / 2.0 - object_height / 2.0
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(300, 700, 10)
    }
}
