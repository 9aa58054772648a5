//! Line-oriented address checking.
//!
//! Reads raw addresses one per line, parses each with [`Address::parse`] and
//! writes one report per line in the configured [`OutputFormat`].

use crate::config::{Config, OutputFormat};
use crate::domain::{Address, ValidationError};
use crate::error::CheckResult;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const INVALID_UTF8_MESSAGE: &str = "Line is not valid UTF-8";

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// The fields of a successfully parsed address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressFields {
    pub block: String,
    pub street: String,
    pub unit: String,
    pub postal_code: String,
    pub is_private: bool,
}

impl From<&Address> for AddressFields {
    fn from(address: &Address) -> Self {
        Self {
            block: address.block().to_string(),
            street: address.street().to_string(),
            unit: address.unit().to_string(),
            postal_code: address.postal_code().to_string(),
            is_private: address.is_private(),
        }
    }
}

/// Outcome of checking one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The line as read, without the line terminator
    pub input: String,

    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressFields>,

    /// Constraint message of the first failing check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals for a checking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub checked: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl CheckSummary {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Checks addresses according to a [`Config`].
#[derive(Debug, Clone)]
pub struct AddressChecker {
    output_format: OutputFormat,
    mark_private: bool,
    max_line_length: usize,
}

impl AddressChecker {
    pub fn new(config: &Config) -> Self {
        Self {
            output_format: config.output_format,
            mark_private: config.mark_private,
            max_line_length: config.max_line_length,
        }
    }

    /// Check a single raw address.
    pub fn check_line(&self, line: &str) -> CheckReport {
        if line.len() > self.max_line_length {
            return CheckReport {
                input: line.to_string(),
                valid: false,
                address: None,
                error: Some(format!(
                    "Line exceeds maximum length of {} bytes",
                    self.max_line_length
                )),
            };
        }

        match Address::parse(line, self.mark_private) {
            Ok(address) => CheckReport {
                input: line.to_string(),
                valid: true,
                address: Some(AddressFields::from(&address)),
                error: None,
            },
            Err(e) => Self::rejected(line, e),
        }
    }

    fn rejected(line: &str, err: ValidationError) -> CheckReport {
        CheckReport {
            input: line.to_string(),
            valid: false,
            address: None,
            error: Some(err.message().to_string()),
        }
    }

    fn undecodable(bytes: &[u8]) -> CheckReport {
        CheckReport {
            input: String::from_utf8_lossy(bytes).into_owned(),
            valid: false,
            address: None,
            error: Some(INVALID_UTF8_MESSAGE.to_string()),
        }
    }

    /// Check every non-blank line of `reader`, writing one report per line.
    ///
    /// A line that is not valid UTF-8 is reported as invalid and the run
    /// continues with the next line.
    ///
    /// # Errors
    ///
    /// Returns `CheckError` if reading, writing or JSON encoding fails.
    /// Invalid addresses are not errors; they are counted in the summary.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> CheckResult<CheckSummary> {
        let mut summary = CheckSummary::default();
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let bytes = strip_line_ending(&buf);
            let report = match std::str::from_utf8(bytes) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.check_line(line),
                Err(_) => Self::undecodable(bytes),
            };

            summary.checked += 1;
            if report.valid {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
                warn!(
                    line = line_number,
                    error = report.error.as_deref().unwrap_or_default(),
                    "Invalid address"
                );
            }

            self.write_report(&mut writer, &report)?;
        }

        writer.flush()?;
        info!(
            checked = summary.checked,
            valid = summary.valid,
            invalid = summary.invalid,
            "Address check complete"
        );
        Ok(summary)
    }

    fn write_report<W: Write>(&self, writer: &mut W, report: &CheckReport) -> CheckResult<()> {
        match self.output_format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, report)?;
                writeln!(writer)?;
            }
            OutputFormat::Text => match (&report.address, &report.error) {
                (Some(fields), _) => writeln!(
                    writer,
                    "OK      {} | block={} street={} unit={} postal_code={}",
                    report.input, fields.block, fields.street, fields.unit, fields.postal_code
                )?,
                (None, error) => writeln!(
                    writer,
                    "INVALID {} | {}",
                    report.input,
                    error.as_deref().unwrap_or_default()
                )?,
            },
        }
        Ok(())
    }
}
