//! Per-sample plotting options and the legacy parameter file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bin_size::BinSize;
use crate::color::LineColor;
use crate::error::PsmcPlotError;
use crate::generation_time::GenerationTime;
use crate::mutation_rate::MutationRate;

/// One sample to plot: a PSMC report file plus the scaling
/// parameters and line style for its curve.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Track {
    /// Path to the PSMC report.
    pub path: PathBuf,
    /// Generation time in years.
    pub generation_time: GenerationTime,
    /// Per-site, per-generation mutation rate.
    pub mutation_rate: MutationRate,
    /// PSMC bin size.
    pub bin_size: BinSize,
    /// Legend label.
    pub label: String,
    /// Line color; a random one is drawn when the input omits it.
    #[serde(default = "random_color")]
    pub color: LineColor,
}

fn random_color() -> LineColor {
    LineColor::random(&mut rand::rng())
}

/// Read tracks from a whitespace-delimited parameter file.
///
/// One track per line: path, generation time, mutation rate, bin
/// size, label, and an optional color. Lines starting with `#` are
/// comments. Tokens may be double-quoted; quotes are not part of the
/// token.
///
/// # Examples
///
/// ```
/// let text = r#"
/// ## path g mu s label color
/// sample.psmc 25 2.5e-8 100 "my sample" red
/// boot.psmc 25 2.5e-8 100 bootstrapped
/// "#;
/// let tracks = psmcplot::read_parameter_str(text).unwrap();
/// assert_eq!(tracks.len(), 2);
/// assert_eq!(tracks[0].label, "my sample");
/// ```
pub fn read_parameter_str(text: &str) -> Result<Vec<Track>, PsmcPlotError> {
    // Tokens are runs of anything that is not whitespace or a
    // double quote.
    let token_re = regex::Regex::new(r#"[^\s"]+"#).unwrap();
    let mut tracks = vec![];

    for (index, line) in text.lines().enumerate() {
        let lineno = index + 1;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        // Quoted labels may contain spaces; capture quoted spans as
        // single tokens first.
        let tokens = tokenize(line, &token_re);
        if tokens.len() < 5 {
            return Err(PsmcPlotError::OptionsError(format!(
                "line {lineno}: expected at least 5 fields \
                 (path, generation time, mutation rate, bin size, label), got {}",
                tokens.len()
            )));
        }

        let color = match tokens.get(5) {
            Some(text) => text.parse()?,
            None => random_color(),
        };
        tracks.push(Track {
            path: PathBuf::from(&tokens[0]),
            generation_time: parse_value(&tokens[1], "generation time", lineno)?,
            mutation_rate: parse_value(&tokens[2], "mutation rate", lineno)?,
            bin_size: parse_value(&tokens[3], "bin size", lineno)?,
            label: tokens[4].clone(),
            color,
        });
    }

    debug!(tracks = tracks.len(), "read parameter file");
    Ok(tracks)
}

/// Read tracks from a parameter file on disk.
pub fn read_parameter_file<P: AsRef<Path>>(path: P) -> Result<Vec<Track>, PsmcPlotError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    read_parameter_str(&text)
}

fn tokenize(line: &str, token_re: &regex::Regex) -> Vec<String> {
    let mut tokens = vec![];
    let mut rest = line;
    loop {
        match rest.find('"') {
            Some(start) => {
                for m in token_re.find_iter(&rest[..start]) {
                    tokens.push(m.as_str().to_string());
                }
                let after = &rest[start + 1..];
                match after.find('"') {
                    Some(end) => {
                        tokens.push(after[..end].to_string());
                        rest = &after[end + 1..];
                    }
                    None => {
                        // Unbalanced quote: fall back to plain tokens.
                        for m in token_re.find_iter(after) {
                            tokens.push(m.as_str().to_string());
                        }
                        return tokens;
                    }
                }
            }
            None => {
                for m in token_re.find_iter(rest) {
                    tokens.push(m.as_str().to_string());
                }
                return tokens;
            }
        }
    }
}

fn parse_value<T>(text: &str, name: &str, lineno: usize) -> Result<T, PsmcPlotError>
where
    T: TryFrom<f64, Error = PsmcPlotError>,
{
    let value: f64 = text.parse().map_err(|_| {
        PsmcPlotError::OptionsError(format!("line {lineno}: invalid {name}: {text:?}"))
    })?;
    T::try_from(value)
        .map_err(|e| PsmcPlotError::OptionsError(format!("line {lineno}: {name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::read_parameter_str;

    #[test]
    fn omitted_color_is_randomized() {
        let tracks = read_parameter_str("a.psmc 25 2.5e-8 100 a\n").unwrap();
        assert_eq!(tracks.len(), 1);
    }

    #[test]
    fn short_line_is_an_error() {
        let err = read_parameter_str("a.psmc 25 2.5e-8 100\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn invalid_rate_is_an_error() {
        assert!(read_parameter_str("a.psmc 25 -1.0 100 a red\n").is_err());
    }
}
