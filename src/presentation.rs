// src/presentation.rs
use crate::options::CliOutputFormat;
use license_count_engine::stats::{LicenseReport, UserLicenses};
use std::io::{self, Write};

/// Presentation settings that never reach the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: CliOutputFormat,
    pub per_user: bool,
}

/// Write `report` to stdout in the requested format.
///
/// # Errors
///
/// Fails when stdout is closed or the report cannot be serialized.
pub fn print_report(report: &LicenseReport, display: OutputOptions) -> crate::error::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, display)?;
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &LicenseReport,
    display: OutputOptions,
) -> crate::error::Result<()> {
    match display.format {
        CliOutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        CliOutputFormat::Table => {
            if display.per_user {
                write_table(out, &report.users)?;
            }
            writeln!(
                out,
                "Total number of licenses required: {}",
                report.total_licenses
            )?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, users: &[UserLicenses]) -> io::Result<()> {
    let width = users
        .iter()
        .map(|u| u.user_id.len())
        .max()
        .unwrap_or(0)
        .max("USER".len());

    writeln!(
        out,
        "{:<width$}  {:>9}  {:>9}  {:>9}  OTHER",
        "USER", "DESKTOPS", "LAPTOPS", "LICENSES"
    )?;
    writeln!(out, "{}", "-".repeat(width + 40))?;

    for u in users {
        let other = u
            .other
            .iter()
            .map(|(kind, n)| format!("{kind}={n}"))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(
            out,
            "{:<width$}  {:>9}  {:>9}  {:>9}  {}",
            u.user_id, u.desktops, u.laptops, u.licenses, other
        )?;
    }
    writeln!(out, "---")?;
    Ok(())
}
