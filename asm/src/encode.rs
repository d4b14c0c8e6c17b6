use arch::op::Op;
use arch::word::{Cell, FIELD_MAX, IP};

use crate::{
    assign::{Layout, Place},
    config::{Config, JmzLayout},
    inst::Inst,
    label::Labels,
    loc::Location,
    msg::Msgs,
    parser::{Line, Stmt},
};

/// `00000`, i.e. `inc 00`. Bumps the instruction pointer past the next cell.
const SKIP_NEXT: Cell = Cell::Op(Op::Inc(IP));

/// Resolves operands of one statement, reporting problems instead of failing.
struct Resolver<'a> {
    labels: &'a Labels,
    line: &'a Line,
    msgs: &'a mut Msgs,
}

impl Resolver<'_> {
    /// Whole-cell value. Unbound labels fall back to 0.
    fn data(&mut self, loc: &Location) -> u32 {
        match loc.resolve(self.labels) {
            Ok(addr) => addr,
            Err(err) => {
                self.msgs
                    .warn(format!("{}, using 00", err), self.line.clone());
                0
            }
        }
    }

    /// 2-digit operand field.
    fn field(&mut self, loc: &Location) -> u32 {
        let addr = self.data(loc);
        self.check(addr)
    }

    fn check(&mut self, addr: u32) -> u32 {
        if addr > FIELD_MAX {
            self.msgs.warn(
                format!("Address {} does not fit a 2-digit operand field", addr),
                self.line.clone(),
            );
        }
        addr
    }
}

/// Render every statement into its cells. The result runs parallel to the program.
pub fn encode(program: &[Stmt], layout: &Layout, cfg: &Config) -> (Vec<Vec<Cell>>, Msgs) {
    let mut msgs = Msgs::new();
    let cells = program
        .iter()
        .zip(&layout.places)
        .map(|(stmt, place)| {
            let mut res = Resolver {
                labels: &layout.labels,
                line: &stmt.line,
                msgs: &mut msgs,
            };
            encode_stmt(&stmt.inst, place, cfg, &mut res)
        })
        .collect();
    (cells, msgs)
}

fn encode_stmt(inst: &Inst, place: &Place, cfg: &Config, res: &mut Resolver) -> Vec<Cell> {
    let ret = place.ret.unwrap_or(place.addr + 1);
    match inst {
        Inst::Def(v) => vec![Cell::Data(res.data(v))],
        Inst::Inc(t) => vec![Cell::Op(Op::Inc(res.field(t)))],
        Inst::Add(t, s) => vec![Cell::Op(Op::Add(res.field(t), res.field(s)))],
        Inst::Sub(t, s) => vec![Cell::Op(Op::Sub(res.field(t), res.field(s)))],
        Inst::Copy(t, s) => vec![Cell::Op(Op::Copy(res.field(t), res.field(s)))],
        Inst::IncIfZero(t, s) => vec![Cell::Op(Op::IncIfZero(res.field(t), res.field(s)))],
        Inst::Load(t, s) => vec![Cell::Op(Op::Load(res.field(t), res.field(s)))],
        Inst::Store(t, s) => vec![Cell::Op(Op::Store(res.field(t), res.field(s)))],
        Inst::Output(s) => vec![Cell::Op(Op::Output(res.field(s)))],
        Inst::Input(t) => vec![Cell::Op(Op::Input(res.field(t)))],
        Inst::Halt => vec![Cell::Op(Op::Halt)],
        Inst::Label(_) => vec![],
        // Skip the target cell, then copy it into the instruction pointer.
        Inst::Jump(t) => vec![
            SKIP_NEXT,
            Cell::Data(res.data(t)),
            Cell::Op(Op::Copy(IP, res.check(ret))),
        ],
        // The conditional skip must stay ahead of the jump block.
        Inst::JumpIfZero(t, s) => {
            // The target is not emitted, but a dangling one is still reported.
            res.data(t);
            let mut cells = vec![
                SKIP_NEXT,
                Cell::Op(Op::IncIfZero(IP, res.field(s))),
                SKIP_NEXT,
                Cell::Op(Op::Copy(IP, res.check(ret))),
            ];
            if cfg.jmz == JmzLayout::Padded {
                cells.push(SKIP_NEXT);
            }
            cells
        }
        Inst::SkipIfZero(s) => vec![Cell::Op(Op::IncIfZero(IP, res.field(s)))],
    }
}
