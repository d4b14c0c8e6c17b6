use indexmap::IndexMap;
use serde::Serialize;

use crate::{error::Error, parser::Line};

/// Label name -> address of the next emitted cell.
#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, (u32, Line)>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    /// Bind `name`. A previous binding is replaced and returned.
    pub fn insert(&mut self, name: String, addr: u32, line: Line) -> Option<(u32, Line)> {
        self.0.insert(name, (addr, line))
    }

    pub fn get_addr(&self, name: &str) -> Option<u32> {
        self.0.get(name).map(|(addr, _)| *addr)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ----------------------------------------------------------------------------
// Label map

#[derive(Debug, Serialize)]
struct MapEntry {
    address: u32,
    file: String,
    line: usize,
}

impl Labels {
    /// YAML listing of every label in definition order.
    pub fn to_yaml(&self) -> Result<String, Error> {
        let map: IndexMap<&str, MapEntry> = self
            .0
            .iter()
            .map(|(name, (addr, line))| {
                let entry = MapEntry {
                    address: *addr,
                    file: line.path().to_string(),
                    line: line.no(),
                };
                (name.as_str(), entry)
            })
            .collect();
        serde_yaml::to_string(&map).map_err(Error::LabelMap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(idx: usize) -> Line {
        Line::new("t.cell", idx, "lbl @a")
    }

    #[test]
    fn redefinition_overwrites() {
        let mut labels = Labels::new();
        assert!(labels.insert("@a".to_string(), 1, line(0)).is_none());
        let prev = labels.insert("@a".to_string(), 4, line(3));
        assert_eq!(prev.map(|(addr, l)| (addr, l.no())), Some((1, 1)));
        assert_eq!(labels.get_addr("@a"), Some(4));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn yaml_in_definition_order() {
        let mut labels = Labels::new();
        labels.insert("@z".to_string(), 0, line(0));
        labels.insert("@a".to_string(), 5, line(2));
        let yaml = labels.to_yaml().unwrap();
        let z = yaml.find("'@z'").or_else(|| yaml.find("\"@z\"")).unwrap();
        let a = yaml.find("'@a'").or_else(|| yaml.find("\"@a\"")).unwrap();
        assert!(z < a, "{}", yaml);
        assert!(yaml.contains("address: 5"), "{}", yaml);
        assert!(yaml.contains("line: 3"), "{}", yaml);
    }
}
