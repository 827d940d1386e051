//! Parse the text report written by PSMC.
//!
//! The report is line-oriented and keyed on two-letter prefixes.
//! Only four record types matter for plotting:
//!
//! * `MM ... n_iterations:N, ...` — run metadata,
//! * `RD k` — opens the parameter block of EM iteration `k`,
//! * `RS` — one tab-delimited trajectory segment of the open block,
//! * `PA` — closes the open block and carries the estimated theta.
//!
//! Everything else (`CC`, `TR`, `//`, ...) is ignored.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::PsmcPlotError;

/// One segment of the piecewise-constant trajectory, in the
/// report's internal coalescent units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Scaled segment start time (`RS` field 2).
    pub time: f64,
    /// Scaled population size lambda (`RS` field 3).
    pub lambda: f64,
}

/// The parameter block of one EM iteration: an `RD` header, the `RS`
/// segments that follow it, and the theta estimate from the closing
/// `PA` record.
#[derive(Clone, Debug)]
pub struct Block {
    iteration: u32,
    theta: f64,
    segments: Vec<Segment>,
}

impl Block {
    /// EM iteration index from the `RD` header.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Estimated theta from the closing `PA` record.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// The trajectory segments, oldest bin last.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// A parsed PSMC report.
///
/// # Examples
///
/// ```
/// let text = "
/// MM n_iterations:1,
/// RD 1
/// RS\t0\t0.0\t2.5\t0\t0
/// RS\t1\t0.1\t1.5\t0\t0
/// PA 4+5*3+4 0.002
/// ";
/// let report = psmcplot::loads(text).unwrap();
/// let blocks = report.final_blocks().unwrap();
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].theta(), 0.002);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Report {
    n_iterations: Option<u32>,
    blocks: Vec<Block>,
}

// State of the block currently being accumulated.
struct OpenBlock {
    iteration: u32,
    segments: Vec<Segment>,
}

impl std::str::FromStr for Report {
    type Err = PsmcPlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut report = Report::default();
        let mut open: Option<OpenBlock> = None;

        for (index, line) in s.lines().enumerate() {
            let lineno = index + 1;
            let mut tokens = line.split_whitespace();
            let prefix = match tokens.next() {
                Some(p) => p,
                None => continue,
            };
            match prefix {
                "MM" => {
                    if let Some(n) = parse_n_iterations(tokens) {
                        report.n_iterations = Some(n);
                    }
                }
                "RD" => {
                    // A new RD while a block is open discards the
                    // partial block.
                    let iteration = parse_field(tokens.next(), "RD", "iteration", lineno)?;
                    open = Some(OpenBlock {
                        iteration,
                        segments: vec![],
                    });
                }
                "RS" => {
                    let block = open.as_mut().ok_or_else(|| {
                        PsmcPlotError::ReportError(format!(
                            "line {lineno}: RS record outside of an RD block"
                        ))
                    })?;
                    // RS is tab-delimited: index, time, lambda, ...
                    let mut fields = line.split('\t');
                    let time = parse_field(fields.nth(2), "RS", "time", lineno)?;
                    let lambda = parse_field(fields.next(), "RS", "lambda", lineno)?;
                    block.segments.push(Segment { time, lambda });
                }
                "PA" => {
                    let block = open.take().ok_or_else(|| {
                        PsmcPlotError::ReportError(format!(
                            "line {lineno}: PA record outside of an RD block"
                        ))
                    })?;
                    // PA fields: parameter pattern, theta, rho, ...
                    let theta = parse_field(tokens.nth(1), "PA", "theta", lineno)?;
                    report.blocks.push(Block {
                        iteration: block.iteration,
                        theta,
                        segments: block.segments,
                    });
                }
                _ => {}
            }
        }

        debug!(
            blocks = report.blocks.len(),
            n_iterations = report.n_iterations,
            "parsed PSMC report"
        );
        Ok(report)
    }
}

impl Report {
    /// Read a report from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PsmcPlotError> {
        let mut file = std::fs::File::open(path.as_ref())?;
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        buffer.parse()
    }

    /// The `n_iterations` value from the `MM` metadata, if present.
    pub fn n_iterations(&self) -> Option<u32> {
        self.n_iterations
    }

    /// All complete parameter blocks, in file order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The index of the final EM iteration: `n_iterations` when the
    /// metadata names it, otherwise the largest `RD` index seen.
    pub fn final_iteration(&self) -> Option<u32> {
        match self.n_iterations {
            Some(n) if self.blocks.iter().any(|b| b.iteration == n) => Some(n),
            _ => self.blocks.iter().map(|b| b.iteration).max(),
        }
    }

    /// Every block belonging to the final EM iteration.
    ///
    /// A report that concatenates bootstrap replicates repeats the
    /// whole run, so the final iteration appears once per replicate:
    /// the first returned block is the primary estimate and the rest
    /// are bootstrap curves.
    pub fn final_blocks(&self) -> Result<Vec<&Block>, PsmcPlotError> {
        let last = self.final_iteration().ok_or_else(|| {
            PsmcPlotError::ReportError("report contains no complete RD block".to_string())
        })?;
        Ok(self
            .blocks
            .iter()
            .filter(|b| b.iteration == last)
            .collect())
    }
}

fn parse_n_iterations<'a, I: Iterator<Item = &'a str>>(tokens: I) -> Option<u32> {
    for token in tokens {
        if let Some(rest) = token.strip_prefix("n_iterations:") {
            return rest.trim_end_matches(',').parse().ok();
        }
    }
    None
}

fn parse_field<T: std::str::FromStr>(
    field: Option<&str>,
    record: &str,
    name: &str,
    lineno: usize,
) -> Result<T, PsmcPlotError> {
    let text = field.ok_or_else(|| {
        PsmcPlotError::ReportError(format!("line {lineno}: {record} record is missing {name}"))
    })?;
    text.parse().map_err(|_| {
        PsmcPlotError::ReportError(format!(
            "line {lineno}: invalid {name} in {record} record: {text:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::Report;

    #[test]
    fn rs_outside_block_is_an_error() {
        let text = "RS\t0\t0.1\t1.0\t0\t0\n";
        let err = text.parse::<Report>().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let text = "RD 3\nRS\t0\t0.1\t1.0\t0\t0\n";
        let report: Report = text.parse().unwrap();
        assert!(report.blocks().is_empty());
        assert!(report.final_blocks().is_err());
    }

    #[test]
    fn blank_and_unknown_lines_are_skipped() {
        let text = "CC comment\n\nTR 0.001 0.0002\n//\n";
        let report: Report = text.parse().unwrap();
        assert!(report.blocks().is_empty());
    }
}
