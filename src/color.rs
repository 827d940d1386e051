use crate::error::PsmcPlotError;
use serde::{Deserialize, Serialize};

/// The line color of one plotted sample.
///
/// Accepts a small set of named colors or a `#rrggbb` hex triple.
/// When a parameter file omits the color, [`LineColor::random`]
/// draws one so every sample still gets a distinct line.
///
/// # Examples
///
/// ```
/// let red: psmcplot::LineColor = "red".parse().unwrap();
/// assert_eq!(red.rgb(), (255, 0, 0));
/// let teal: psmcplot::LineColor = "#008080".parse().unwrap();
/// assert_eq!(teal.rgb(), (0, 128, 128));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LineColor(u8, u8, u8);

const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("yellow", (255, 215, 0)),
    ("brown", (139, 69, 19)),
    ("pink", (255, 105, 180)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("steelblue", (70, 130, 180)),
    ("goldenrod", (218, 165, 32)),
];

impl LineColor {
    /// The `(r, g, b)` components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// A uniformly random color, used when none was specified.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        Self(rng.random(), rng.random(), rng.random())
    }
}

impl std::str::FromStr for LineColor {
    type Err = PsmcPlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(hex) = name.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
                if let (Ok(r), Ok(g), Ok(b)) = (parse(0..2), parse(2..4), parse(4..6)) {
                    return Ok(Self(r, g, b));
                }
            }
            return Err(PsmcPlotError::ValueError(format!(
                "invalid hex color: {name:?}"
            )));
        }
        let lower = name.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, (r, g, b))| Self(*r, *g, *b))
            .ok_or_else(|| PsmcPlotError::ValueError(format!("unknown color name: {name:?}")))
    }
}

impl TryFrom<String> for LineColor {
    type Error = PsmcPlotError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LineColor> for String {
    fn from(value: LineColor) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for LineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
