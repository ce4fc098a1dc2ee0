pub type Rgb = [u8; 3];

/// Background and foreground colors. Dead cells and empty space use `light`;
/// live cells and grid lines use `dark`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub light: Rgb,
    pub dark: Rgb,
}

impl Palette {
    pub const fn new(light: Rgb, dark: Rgb) -> Self {
        Self { light, dark }
    }

    pub fn light_rgba(&self) -> [u8; 4] {
        rgba(self.light)
    }

    pub fn dark_rgba(&self) -> [u8; 4] {
        rgba(self.dark)
    }
}

fn rgba([r, g, b]: Rgb) -> [u8; 4] {
    [r, g, b, 0xff]
}

pub const PALETTES: [Palette; 5] = [
    Palette::new([255, 255, 255], [0, 0, 0]),
    Palette::new([227, 213, 184], [208, 57, 88]),
    Palette::new([247, 176, 42], [232, 113, 16]),
    Palette::new([255, 252, 151], [146, 31, 58]),
    Palette::new([241, 234, 220], [20, 147, 165]),
];
