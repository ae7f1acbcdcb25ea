use clap::ValueEnum;
use license_count_engine::options::Rounding;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// Human-readable summary line
    #[default]
    Table,
    /// Full report as pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliRounding {
    /// 1 → 1, 3 → 2, 5 → 3
    #[default]
    HalfAway,
    /// 1 → 0, 3 → 2, 5 → 2
    HalfEven,
}

impl From<CliRounding> for Rounding {
    fn from(value: CliRounding) -> Self {
        match value {
            CliRounding::HalfAway => Self::HalfAwayFromZero,
            CliRounding::HalfEven => Self::HalfToEven,
        }
    }
}
