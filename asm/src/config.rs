use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

use crate::error::Error;

/// Which operation the `cpy` keyword assembles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CpyMode {
    /// `[tt] = [ss]`, opcode 3
    #[default]
    Copy,
    /// `[tt] = max([tt] - [ss], 0)`, opcode 2
    Sub,
}

/// How many cells a `jmz` occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum JmzLayout {
    /// Reserve exactly the 4 emitted cells.
    #[default]
    Compact,
    /// Reserve 5 cells and fill the last one with `00000`.
    Padded,
}

impl JmzLayout {
    pub fn size(&self) -> u32 {
        match self {
            JmzLayout::Compact => 4,
            JmzLayout::Padded => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Leading character of label names
    pub sigil: char,
    pub cpy: CpyMode,
    pub jmz: JmzLayout,
    /// Report lines whose keyword is not an instruction
    pub warn_unknown: bool,
    /// Report labels bound more than once
    pub warn_redefined: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sigil: '@',
            cpy: CpyMode::default(),
            jmz: JmzLayout::default(),
            warn_unknown: false,
            warn_redefined: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Config(path.to_string(), e))
    }

    pub fn from_yaml(src: &str) -> Result<Self, Error> {
        serde_yaml::from_str(src).map_err(|e| Error::Config("<inline>".to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.sigil, '@');
        assert_eq!(cfg.cpy, CpyMode::Copy);
        assert_eq!(cfg.jmz, JmzLayout::Compact);
        assert!(!cfg.warn_unknown);
        assert!(cfg.warn_redefined);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = Config::from_yaml("cpy: sub\njmz: padded\n").unwrap();
        assert_eq!(cfg.cpy, CpyMode::Sub);
        assert_eq!(cfg.jmz, JmzLayout::Padded);
        assert_eq!(cfg.sigil, '@');
        assert!(cfg.warn_redefined);
    }

    #[test]
    fn custom_sigil() {
        let cfg = Config::from_yaml("sigil: '$'\nwarn_unknown: true\n").unwrap();
        assert_eq!(cfg.sigil, '$');
        assert!(cfg.warn_unknown);
    }

    #[test]
    fn bad_yaml() {
        assert!(matches!(
            Config::from_yaml("cpy: move\n"),
            Err(Error::Config(..))
        ));
    }

    #[test]
    fn jmz_sizes() {
        assert_eq!(JmzLayout::Compact.size(), 4);
        assert_eq!(JmzLayout::Padded.size(), 5);
    }
}
