use crate::{config::Config, inst::Inst, label::Labels, msg::Msgs, parser::Stmt};

/// Where a statement landed in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Place {
    /// First cell. For a label this is the address it binds.
    pub addr: u32,
    /// Cell a jump copies into the instruction pointer.
    pub ret: Option<u32>,
}

/// Result of the first pass. `places` runs parallel to the program.
#[derive(Debug, Clone)]
pub struct Layout {
    pub places: Vec<Place>,
    pub labels: Labels,
    /// Total number of reserved cells
    pub size: u32,
}

/// Assign addresses to every statement and bind every label.
pub fn assign(program: &[Stmt], cfg: &Config) -> (Layout, Msgs) {
    let mut msgs = Msgs::new();
    let mut labels = Labels::new();
    let mut places = Vec::with_capacity(program.len());
    let mut addr: u32 = 0;

    for stmt in program {
        let ret = match stmt.inst {
            Inst::Jump(_) | Inst::JumpIfZero(..) => Some(addr + 1),
            _ => None,
        };

        if let Inst::Label(name) = &stmt.inst {
            if let Some((_, prev)) = labels.insert(name.clone(), addr, stmt.line.clone()) {
                if cfg.warn_redefined {
                    msgs.warn(format!("Re-defined label: `{}`", name), stmt.line.clone());
                    msgs.note(
                        "Already defined here. The later definition wins.".to_string(),
                        prev,
                    );
                }
            }
        }

        places.push(Place { addr, ret });
        addr += stmt.inst.size(cfg.jmz);
    }

    let layout = Layout {
        places,
        labels,
        size: addr,
    };
    (layout, msgs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::JmzLayout, msg::MsgKind, parser::parse_lines};

    fn run(src: &str, cfg: &Config) -> (Vec<Stmt>, Layout, Msgs) {
        let (program, _) = parse_lines("t.cell", src.lines(), cfg);
        let (layout, msgs) = assign(&program, cfg);
        (program, layout, msgs)
    }

    #[test]
    fn marker_binds_next_cell() {
        let src = "inc 01\nlbl @here\nout 10\njmp @here";
        let (_, layout, _) = run(src, &Config::default());
        assert_eq!(layout.labels.get_addr("@here"), Some(1));
        let addrs: Vec<_> = layout.places.iter().map(|p| p.addr).collect();
        assert_eq!(addrs, vec![0, 1, 1, 2]);
        assert_eq!(layout.size, 5);
    }

    #[test]
    fn jump_return_target() {
        let src = "hlt\nhlt\njmp 00\njmz 00 01";
        let (_, layout, _) = run(src, &Config::default());
        assert_eq!(layout.places[2], Place { addr: 2, ret: Some(3) });
        assert_eq!(layout.places[3], Place { addr: 5, ret: Some(6) });
        assert_eq!(layout.places[0].ret, None);
        assert_eq!(layout.size, 9);
    }

    #[test]
    fn padded_jmz_reserves_five() {
        let cfg = Config {
            jmz: JmzLayout::Padded,
            ..Config::default()
        };
        let src = "jmz @end 01\nlbl @end\nhlt";
        let (_, layout, _) = run(src, &cfg);
        assert_eq!(layout.labels.get_addr("@end"), Some(5));
        assert_eq!(layout.size, 6);
    }

    #[test]
    fn addresses_are_injective() {
        let src = "lbl @a\ndef 01\njmp @a\nlbl @b\nlbl @c\njmz @b 02\nskp 03\nout 04\nhlt";
        let (program, layout, _) = run(src, &Config::default());
        let mut addrs: Vec<u32> = program
            .iter()
            .zip(&layout.places)
            .filter(|(stmt, _)| !stmt.inst.is_marker())
            .map(|(_, place)| place.addr)
            .collect();
        let count = addrs.len();
        addrs.dedup();
        assert_eq!(addrs.len(), count);
        assert_eq!(layout.labels.get_addr("@b"), layout.labels.get_addr("@c"));
    }

    #[test]
    fn redefined_label_warns_and_overwrites() {
        let src = "lbl @x\nhlt\nlbl @x\nhlt";
        let (_, layout, msgs) = run(src, &Config::default());
        assert_eq!(layout.labels.get_addr("@x"), Some(1));
        assert_eq!(msgs.count(MsgKind::Warn), 1);
        assert_eq!(msgs.count(MsgKind::Note), 1);

        let quiet = Config {
            warn_redefined: false,
            ..Config::default()
        };
        let (_, _, msgs) = run(src, &quiet);
        assert!(msgs.is_empty());
    }
}
