use color_print::cformat;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumString};

use crate::word::Word;

// ----------------------------------------------------------------------------
// Opcode

/// Leading digit of every executable word.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum OpCode {
    #[strum(serialize = "inc")]
    Inc = 0,
    #[strum(serialize = "add")]
    Add = 1,
    #[strum(serialize = "sub")]
    Sub = 2,
    #[strum(serialize = "cpy")]
    Copy = 3,
    #[strum(serialize = "inz")]
    IncIfZero = 4,
    #[strum(serialize = "get")]
    Load = 5,
    #[strum(serialize = "sto")]
    Store = 6,
    #[strum(serialize = "out")]
    Output = 7,
    #[strum(serialize = "inp")]
    Input = 8,
    #[strum(serialize = "hlt")]
    Halt = 9,
}

// ----------------------------------------------------------------------------
// Resolved operation

/// A primitive machine operation with every operand already an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Inc(u32),
    Add(u32, u32),
    Sub(u32, u32),
    Copy(u32, u32),
    IncIfZero(u32, u32),
    Load(u32, u32),
    Store(u32, u32),
    Output(u32),
    Input(u32),
    Halt,
}

impl Op {
    pub fn opcode(&self) -> OpCode {
        match self {
            Op::Inc(_) => OpCode::Inc,
            Op::Add(..) => OpCode::Add,
            Op::Sub(..) => OpCode::Sub,
            Op::Copy(..) => OpCode::Copy,
            Op::IncIfZero(..) => OpCode::IncIfZero,
            Op::Load(..) => OpCode::Load,
            Op::Store(..) => OpCode::Store,
            Op::Output(_) => OpCode::Output,
            Op::Input(_) => OpCode::Input,
            Op::Halt => OpCode::Halt,
        }
    }

    /// Target and source fields. Unused fields are 0.
    pub fn fields(&self) -> (u32, u32) {
        match *self {
            Op::Inc(tt) => (tt, 0),
            Op::Add(tt, ss)
            | Op::Sub(tt, ss)
            | Op::Copy(tt, ss)
            | Op::IncIfZero(tt, ss)
            | Op::Load(tt, ss)
            | Op::Store(tt, ss) => (tt, ss),
            Op::Output(ss) => (0, ss),
            Op::Input(tt) => (tt, 0),
            Op::Halt => (0, 0),
        }
    }

    pub fn to_word(&self) -> Word {
        let (tt, ss) = self.fields();
        Word::op(self.opcode(), tt, ss)
    }

    pub fn cformat(&self) -> String {
        let (tt, ss) = self.fields();
        cformat!(
            "<red>{:<4}</><blue>{:0>2} {:0>2}</>",
            self.opcode().to_string(),
            tt,
            ss
        )
    }
}

// ----------------------------------------------------------------------------

macro_rules! test_word {
    ($name:ident, $op:expr, $word:expr) => {
        #[test]
        fn $name() {
            let op = $op;
            let word = op.to_word();
            println!("{:?} -> {}", op, word);
            assert_eq!(word.as_str(), $word, "op: {:?}", op);
            assert_eq!(word.as_str().len(), 5);
        }
    };
}

test_word!(test_inc, Op::Inc(5), "00500");
test_word!(test_add, Op::Add(1, 2), "10102");
test_word!(test_sub, Op::Sub(1, 2), "20102");
test_word!(test_copy, Op::Copy(0, 2), "30002");
test_word!(test_inz, Op::IncIfZero(0, 5), "40005");
test_word!(test_load, Op::Load(10, 11), "51011");
test_word!(test_store, Op::Store(10, 11), "61011");
test_word!(test_output, Op::Output(10), "70010");
test_word!(test_input, Op::Input(3), "80300");
test_word!(test_halt, Op::Halt, "90000");

#[test]
fn test_opcode_digits() {
    for digit in 0..=9u8 {
        let code = OpCode::try_from(digit).unwrap();
        assert_eq!(u8::from(code), digit);
    }
    assert!(OpCode::try_from(10u8).is_err());
    assert_eq!("inz".parse::<OpCode>().unwrap(), OpCode::IncIfZero);
    assert_eq!(OpCode::Load.to_string(), "get");
}
