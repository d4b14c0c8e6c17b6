use color_print::cformat;
use std::fmt;

use crate::op::{Op, OpCode};

// ----------------------------------------------------------------------------

/// Address of the instruction pointer. Writing to it transfers control.
pub const IP: u32 = 0;

/// Largest address that still fits a 2-digit operand field.
pub const FIELD_MAX: u32 = 99;

/// Render an address as decimal, zero-padded to at least 2 digits.
/// Addresses above `FIELD_MAX` keep their natural width.
pub fn fmt_addr(addr: u32) -> String {
    format!("{:0>2}", addr)
}

// ----------------------------------------------------------------------------
// Machine word

/// One memory cell of the loadable program image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Plain data word holding `value`.
    pub fn data(value: u32) -> Self {
        Word(fmt_addr(value))
    }

    /// `opcode` digit followed by the two operand fields.
    pub fn op(code: OpCode, tt: u32, ss: u32) -> Self {
        Word(format!("{}{}{}", u8::from(code), fmt_addr(tt), fmt_addr(ss)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// ----------------------------------------------------------------------------
// Memory cell

/// Content of one emitted cell before it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Op(Op),
    Data(u32),
}

impl Cell {
    pub fn to_word(&self) -> Word {
        match self {
            Cell::Op(op) => op.to_word(),
            Cell::Data(value) => Word::data(*value),
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Cell::Op(op) => op.cformat(),
            Cell::Data(value) => cformat!("<yellow>{:<4}</><yellow>{:0>2}</>", "dat", value),
        }
    }
}

#[test]
fn test_fmt_addr() {
    assert_eq!(fmt_addr(0), "00");
    assert_eq!(fmt_addr(7), "07");
    assert_eq!(fmt_addr(42), "42");
    assert_eq!(fmt_addr(99), "99");
    assert_eq!(fmt_addr(100), "100");
}

#[test]
fn test_data_word() {
    assert_eq!(Word::data(3).as_str(), "03");
    assert_eq!(Word::data(1234).to_string(), "1234");
}

#[test]
fn test_word_padding() {
    assert_eq!(format!("[{:<6}]", Word::data(3)), "[03    ]");
    assert_eq!(format!("[{:<6}]", Word::op(OpCode::Halt, 0, 0)), "[90000 ]");
}

#[test]
fn test_op_word() {
    assert_eq!(Word::op(OpCode::Add, 12, 34).as_str(), "11234");
    assert_eq!(Word::op(OpCode::Halt, 0, 0).as_str(), "90000");
}

#[test]
fn test_cell_word() {
    assert_eq!(Cell::Data(0).to_word().as_str(), "00");
    assert_eq!(Cell::Op(Op::Inc(0)).to_word().as_str(), "00000");
}
