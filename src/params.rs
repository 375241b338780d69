//! The enumerated parameter space driving snippet resolution.

use clap::ValueEnum;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    Arm,
}

/// Optional hardware accelerator used by the object detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Accelerator {
    /// Google Coral edge TPU.
    Coral,
    /// Intel iGPU, used for decode only; detection stays on the CPU.
    Intel,
    /// Rockchip NPU.
    Rockchip,
    #[default]
    None,
}

/// Board identifier, only consulted for ARM targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Board {
    Rpi4,
    #[default]
    Generic,
}

/// Matches `value` case-insensitively against the names of `T`.
fn parse_value<T: ValueEnum>(name: &'static str, value: &str) -> Result<T> {
    <T as ValueEnum>::from_str(value.trim(), true).map_err(|_| Error::InvalidParameter {
        name,
        value: value.to_string(),
        expected: T::value_variants()
            .iter()
            .filter_map(ValueEnum::to_possible_value)
            .map(|possible| possible.get_name().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn write_value<T: ValueEnum>(value: &T, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match value.to_possible_value() {
        Some(possible) => f.write_str(possible.get_name()),
        None => Ok(()),
    }
}

impl FromStr for Architecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_value("architecture", s)
    }
}

impl FromStr for Accelerator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_value("accelerator", s)
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_value("board", s)
    }
}

impl Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_value(self, f)
    }
}

impl Display for Accelerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_value(self, f)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_value(self, f)
    }
}

/// A validated (architecture, accelerator, board) tuple.
///
/// `board` is always `Generic` for x86 targets, so two parameter sets that
/// resolve to the same output compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    pub architecture: Architecture,
    pub accelerator: Accelerator,
    pub board: Board,
}

impl ParameterSet {
    pub fn new(architecture: Architecture, accelerator: Accelerator, board: Board) -> Self {
        let board = match architecture {
            Architecture::Arm => board,
            Architecture::X86 => Board::Generic,
        };
        Self { architecture, accelerator, board }
    }

    /// Builds a parameter set from operator-supplied strings.
    ///
    /// # Arguments
    /// * `architecture` - Mandatory; `None` is rejected like an unknown value
    /// * `accelerator` - Defaults to `none`
    /// * `board` - Defaults to `generic`; not even parsed unless the target is ARM
    ///
    /// # Returns
    /// * `Err(Error::InvalidParameter)` for any value outside its domain
    pub fn parse(
        architecture: Option<&str>,
        accelerator: Option<&str>,
        board: Option<&str>,
    ) -> Result<Self> {
        let architecture: Architecture = architecture.unwrap_or_default().parse()?;
        let accelerator =
            accelerator.map(str::parse::<Accelerator>).transpose()?.unwrap_or_default();

        let board = match (architecture, board) {
            (Architecture::Arm, Some(board)) => board.parse()?,
            (Architecture::X86, Some(board)) => {
                log::warn!("Ignoring board '{board}': boards only apply to arm targets");
                Board::Generic
            }
            (_, None) => Board::Generic,
        };

        Ok(Self::new(architecture, accelerator, board))
    }

    /// Every enumerated combination, with boards varied only under ARM.
    pub fn all() -> Vec<Self> {
        let mut sets = Vec::new();
        for architecture in Architecture::value_variants() {
            let boards: &[Board] = match architecture {
                Architecture::X86 => &[Board::Generic],
                Architecture::Arm => Board::value_variants(),
            };
            for accelerator in Accelerator::value_variants() {
                for board in boards {
                    sets.push(Self::new(*architecture, *accelerator, *board));
                }
            }
        }
        sets
    }
}

impl Display for ParameterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.architecture {
            Architecture::Arm => write!(
                f,
                "arch={} accelerator={} board={}",
                self.architecture, self.accelerator, self.board
            ),
            Architecture::X86 => {
                write!(f, "arch={} accelerator={}", self.architecture, self.accelerator)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ARM".parse::<Architecture>().unwrap(), Architecture::Arm);
        assert_eq!(" Coral ".parse::<Accelerator>().unwrap(), Accelerator::Coral);
        assert_eq!("RPi4".parse::<Board>().unwrap(), Board::Rpi4);
    }

    #[test]
    fn names_round_trip_through_display() {
        for board in Board::value_variants() {
            assert_eq!(board.to_string().parse::<Board>().unwrap(), *board);
        }
        assert_eq!(Architecture::X86.to_string(), "x86");
        assert_eq!(Accelerator::None.to_string(), "none");
        assert_eq!(Board::Rpi4.to_string(), "rpi4");
    }

    #[test]
    fn unknown_accelerator_lists_every_name() {
        let err = "hailo".parse::<Accelerator>().unwrap_err();
        assert!(err.to_string().ends_with("Expected one of: coral, intel, rockchip, none."), "{err}");
    }

    #[test]
    fn rejects_unknown_architecture() {
        let err = "mips".parse::<Architecture>().unwrap_err();
        match err {
            Error::InvalidParameter { name, value, expected } => {
                assert_eq!(name, "architecture");
                assert_eq!(value, "mips");
                assert_eq!(expected, "x86, arm");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn defaults_accelerator_and_board() {
        let set = ParameterSet::parse(Some("arm"), None, None).unwrap();
        assert_eq!(set.accelerator, Accelerator::None);
        assert_eq!(set.board, Board::Generic);
    }

    #[test]
    fn missing_architecture_is_rejected() {
        let err = ParameterSet::parse(None, None, None).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "architecture", .. }));
    }

    #[test]
    fn board_is_ignored_for_x86() {
        let set = ParameterSet::parse(Some("x86"), Some("intel"), Some("whatever")).unwrap();
        assert_eq!(set.board, Board::Generic);
    }

    #[test]
    fn unknown_board_is_rejected_for_arm() {
        let err = ParameterSet::parse(Some("arm"), None, Some("jetson")).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "board", .. }));
    }

    #[test]
    fn unknown_accelerator_is_rejected() {
        let err = ParameterSet::parse(Some("x86"), Some("tpu"), None).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "accelerator", .. }));
    }

    #[test]
    fn enumerates_the_full_domain() {
        // 4 accelerators on x86, 4 accelerators x 2 boards on arm
        assert_eq!(ParameterSet::all().len(), 12);
    }
}
