use color_print::cformat;

use crate::{error::Error, label::Labels};

/// An operand as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Absolute(u32),
    /// Label name, sigil included
    Symbolic(String),
}

impl Location {
    pub fn parse(token: &str, sigil: char) -> Result<Location, Error> {
        if token.starts_with(sigil) {
            return Ok(Location::Symbolic(token.to_string()));
        }
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::MalformedOperand(token.to_string()));
        }
        token
            .parse::<u32>()
            .map(Location::Absolute)
            .map_err(|_| Error::MalformedOperand(token.to_string()))
    }

    pub fn resolve(&self, labels: &Labels) -> Result<u32, Error> {
        match self {
            Location::Absolute(addr) => Ok(*addr),
            Location::Symbolic(name) => labels
                .get_addr(name)
                .ok_or_else(|| Error::UnboundLabel(name.clone())),
        }
    }

    pub fn cformat(&self, labels: &Labels) -> String {
        match self {
            Location::Absolute(addr) => cformat!("<yellow>{:0>2}</>", addr),
            Location::Symbolic(name) => match labels.get_addr(name) {
                Some(addr) => cformat!("<green>{}({:0>2})</>", name, addr),
                None => cformat!("<red,underline>{}</>", name),
            },
        }
    }
}
