//! Projection of a [DigitPairDistribution] onto a renderable 10x10 heatmap.

use std::array;
use std::fmt::{Display, Formatter};

use crate::digits::{DigitPairDistribution, DIGITS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// An unquantised colour with channels on a 0-255 scale. Interpolation happens here; [Rgb] is
/// only derived for display, since rounding channels independently can break monotonicity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}
impl Colour {
    /// Relative luminance on a 0-255 scale.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue
    }

    pub fn to_rgb(&self) -> Rgb {
        let quantise = |channel: f64| channel.round().clamp(0.0, 255.0) as u8;
        Rgb(quantise(self.red), quantise(self.green), quantise(self.blue))
    }
}

impl From<Rgb> for Colour {
    fn from(rgb: Rgb) -> Self {
        Self {
            red: rgb.0 as f64,
            green: rgb.1 as f64,
            blue: rgb.2 as f64,
        }
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_rgb())
    }
}

/// A continuous colour scale, linearly interpolated between evenly spaced stops. The stops must
/// be ordered by strictly decreasing luminance, which keeps the mapping monotonic.
#[derive(Debug, Clone, Copy)]
pub struct ColourScale {
    stops: &'static [Rgb],
}
impl ColourScale {
    /// Light cyan through to dark aubergine.
    pub const DENSE: ColourScale = ColourScale {
        stops: &[
            Rgb(230, 240, 240),
            Rgb(191, 221, 229),
            Rgb(156, 201, 226),
            Rgb(129, 180, 227),
            Rgb(115, 154, 228),
            Rgb(117, 127, 221),
            Rgb(120, 100, 202),
            Rgb(119, 74, 175),
            Rgb(113, 50, 141),
            Rgb(100, 31, 104),
            Rgb(80, 20, 66),
            Rgb(54, 14, 36),
        ],
    };

    /// Shading glyphs, lightest first.
    const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

    /// Colour for a normalised intensity in `[0, 1]`; values outside the range are clamped.
    pub fn colour(&self, intensity: f64) -> Colour {
        let intensity = if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) };
        let segments = self.stops.len() - 1;
        let position = intensity * segments as f64;
        let lower = (position.floor() as usize).min(segments - 1);
        let fraction = position - lower as f64;
        let (from, to) = (Colour::from(self.stops[lower]), Colour::from(self.stops[lower + 1]));
        let lerp = |from: f64, to: f64| from + (to - from) * fraction;
        Colour {
            red: lerp(from.red, to.red),
            green: lerp(from.green, to.green),
            blue: lerp(from.blue, to.blue),
        }
    }

    /// Coarse glyph rendition of the same intensity, for terminals.
    pub fn shade(intensity: f64) -> char {
        let intensity = if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) };
        let index = (intensity * (Self::SHADES.len() - 1) as f64).round() as usize;
        Self::SHADES[index]
    }
}

impl Default for ColourScale {
    fn default() -> Self {
        Self::DENSE
    }
}

/// A heatmap ready for rendering. `grid[home_digit][away_digit]` holds the probability; the away
/// axis runs along the top and the home axis down the side, both ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapProjection {
    pub grid: [[f64; DIGITS]; DIGITS],
    pub labels: [[String; DIGITS]; DIGITS],
    pub intensities: [[f64; DIGITS]; DIGITS],
    pub colours: [[Colour; DIGITS]; DIGITS],
    pub row_axis: [usize; DIGITS],
    pub col_axis: [usize; DIGITS],
}

/// Formats a probability as a percentage with one decimal place.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

pub fn project_heatmap(distribution: &DigitPairDistribution) -> HeatmapProjection {
    project_heatmap_with(distribution, &ColourScale::default())
}

pub fn project_heatmap_with(distribution: &DigitPairDistribution, scale: &ColourScale) -> HeatmapProjection {
    let grid = *distribution.rows();
    let max = distribution.max();
    let intensities = grid.map(|row| row.map(|probability| if max > 0.0 { probability / max } else { 0.0 }));
    HeatmapProjection {
        labels: grid.map(|row| row.map(format_percent)),
        colours: intensities.map(|row| row.map(|intensity| scale.colour(intensity))),
        grid,
        intensities,
        row_axis: array::from_fn(|digit| digit),
        col_axis: array::from_fn(|digit| digit),
    }
}
