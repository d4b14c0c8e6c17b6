use color_print::cformat;
use strum::{Display, EnumString};

use crate::{config::JmzLayout, label::Labels, loc::Location};

// ----------------------------------------------------------------------------
// Keyword

/// Leading token of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Keyword {
    #[strum(to_string = "def", serialize = "set")]
    Def,
    #[strum(serialize = "inc")]
    Inc,
    #[strum(serialize = "add")]
    Add,
    #[strum(serialize = "sub")]
    Sub,
    #[strum(serialize = "cpy")]
    Cpy,
    #[strum(serialize = "inz")]
    Inz,
    #[strum(serialize = "get")]
    Get,
    #[strum(serialize = "sto")]
    Sto,
    #[strum(serialize = "out")]
    Out,
    #[strum(serialize = "inp")]
    Inp,
    #[strum(serialize = "hlt")]
    Hlt,
    #[strum(serialize = "lbl")]
    Lbl,
    #[strum(serialize = "jmp")]
    Jmp,
    #[strum(serialize = "jmz")]
    Jmz,
    #[strum(serialize = "skp")]
    Skp,
}

impl Keyword {
    pub fn arity(&self) -> usize {
        use Keyword::*;
        match self {
            Hlt => 0,
            Def | Inc | Out | Inp | Lbl | Jmp | Skp => 1,
            Add | Sub | Cpy | Inz | Get | Sto | Jmz => 2,
        }
    }
}

// ----------------------------------------------------------------------------
// Instruction

/// One parsed source line, operands unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    Def(Location),
    Inc(Location),
    Add(Location, Location),
    Sub(Location, Location),
    Copy(Location, Location),
    IncIfZero(Location, Location),
    Load(Location, Location),
    Store(Location, Location),
    Output(Location),
    Input(Location),
    Halt,
    /// Binds its name to the address of the next emitted cell.
    Label(String),
    Jump(Location),
    JumpIfZero(Location, Location),
    SkipIfZero(Location),
}

impl Inst {
    /// Number of cells reserved at address assignment.
    pub fn size(&self, jmz: JmzLayout) -> u32 {
        match self {
            Inst::Label(_) => 0,
            Inst::Jump(_) => 3,
            Inst::JumpIfZero(..) => jmz.size(),
            _ => 1,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Inst::Label(_))
    }

    pub fn cformat(&self, labels: &Labels) -> String {
        let loc = |l: &Location| l.cformat(labels);
        macro_rules! instfmt {
            ($name:expr) => {
                cformat!("<red>{:<4}</>", $name)
            };
            ($name:expr, $a:expr) => {
                cformat!("<red>{:<4}</>{}", $name, $a)
            };
            ($name:expr, $a:expr, $b:expr) => {
                cformat!("<red>{:<4}</>{} {}", $name, $a, $b)
            };
        }
        match self {
            Inst::Def(v) => instfmt!("def", loc(v)),
            Inst::Inc(t) => instfmt!("inc", loc(t)),
            Inst::Add(t, s) => instfmt!("add", loc(t), loc(s)),
            Inst::Sub(t, s) => instfmt!("sub", loc(t), loc(s)),
            Inst::Copy(t, s) => instfmt!("cpy", loc(t), loc(s)),
            Inst::IncIfZero(t, s) => instfmt!("inz", loc(t), loc(s)),
            Inst::Load(t, s) => instfmt!("get", loc(t), loc(s)),
            Inst::Store(t, s) => instfmt!("sto", loc(t), loc(s)),
            Inst::Output(s) => instfmt!("out", loc(s)),
            Inst::Input(t) => instfmt!("inp", loc(t)),
            Inst::Halt => instfmt!("hlt"),
            Inst::Label(name) => cformat!("<green>{}:</>", name),
            Inst::Jump(t) => instfmt!("jmp", loc(t)),
            Inst::JumpIfZero(t, s) => instfmt!("jmz", loc(t), loc(s)),
            Inst::SkipIfZero(s) => instfmt!("skp", loc(s)),
        }
    }
}
