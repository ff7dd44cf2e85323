//! Typed views over unit and parameter nodes.
//!
//! A parameter's value is an expression tree of `Parameter*` nodes. The
//! tree is rebuilt here and rendered back to a formula such as
//! `(d0 * 2 mm)`, with literal values converted into their own unit.

use std::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::{Node, NodeId, Value};
use crate::segment::Segment;

/// Expression trees are shallow; deeper nesting means a reference cycle.
const MAX_DEPTH: usize = 64;

/// A unit as seen by a parameter: fixed, or derived from other units.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: NodeId,
    pub symbol: String,
    pub offset: f64,
    /// Scale from this unit to the internal base unit.
    pub factor: f64,
    pub supported: bool,
}

impl Unit {
    fn from_node(segment: &Segment, node: &Node, depth: usize) -> Option<Self> {
        if depth > MAX_DEPTH {
            return None;
        }
        if let Some(symbol) = node.get("unit").and_then(Value::as_str) {
            return Some(Unit {
                id: node.id,
                symbol: symbol.to_string(),
                offset: node.f64("unit_offset").unwrap_or(0.0),
                factor: node.f64("unit_factor").unwrap_or(1.0),
                supported: node.get("unit_supported").and_then(Value::as_bool).unwrap_or(true),
            });
        }
        if !node.is_type("Unit") {
            return None;
        }

        let parts = |key: &str| -> Vec<Unit> {
            node.get(key)
                .and_then(Value::as_array)
                .unwrap_or_default()
                .iter()
                .filter_map(Value::target)
                .filter_map(|id| segment.node(id))
                .filter_map(|n| Unit::from_node(segment, n, depth + 1))
                .collect()
        };
        let numerators = parts("numerators");
        let denominators = parts("denominators");

        let mut symbol = numerators.iter().map(|u| u.symbol.as_str()).collect::<Vec<_>>().join("*");
        if symbol.is_empty() && !denominators.is_empty() {
            symbol.push('1');
        }
        for d in &denominators {
            symbol.push('/');
            symbol.push_str(&d.symbol);
        }
        let factor = numerators.iter().map(|u| u.factor).product::<f64>()
            / denominators.iter().map(|u| u.factor).product::<f64>();
        Some(Unit {
            id: node.id,
            symbol,
            offset: 0.0,
            factor,
            supported: numerators.iter().chain(&denominators).all(|u| u.supported),
        })
    }

    /// Internal value expressed in this unit.
    pub fn to_unit(&self, internal: f64) -> f64 {
        internal / self.factor - self.offset
    }
}

/// One node of a parameter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Value { value: f64, unit: String },
    Ref(String),
    Constant(String),
    Boolean(bool),
    Function { name: String, args: SmallVec<[Box<Expr>; 2]> },
    Negate(Box<Expr>),
    /// `x ^ unit`; rendered as its operand.
    PowerIdent(Box<Expr>),
    Operation { op: String, lhs: Box<Expr>, rhs: Box<Expr> },
    /// Reference to a node that is not part of an expression.
    Unknown(String),
    Missing,
}

impl Expr {
    fn build(segment: &Segment, node: Option<&Node>, depth: usize) -> Expr {
        let Some(node) = node else { return Expr::Missing };
        if depth > MAX_DEPTH {
            tracing::warn!(node = %node.id, "parameter expression too deep");
            return Expr::Missing;
        }
        let sub = |key: &str| Box::new(Expr::build(segment, segment.follow(node, key), depth + 1));
        let unit = || segment.follow(node, "ref_unit").and_then(|u| Unit::from_node(segment, u, 0));
        let name = || node.name.clone().unwrap_or_default();

        match node.type_name.as_deref() {
            Some("ParameterValue") => {
                let raw = node.f64("value").unwrap_or(0.0);
                match unit() {
                    Some(u) => Expr::Value { value: u.to_unit(raw), unit: u.symbol },
                    None => Expr::Value { value: raw, unit: String::new() },
                }
            }
            Some("ParameterRef") => match segment.follow(node, "ref_parameter") {
                Some(target) => Expr::Ref(target.name.clone().unwrap_or_else(|| target.label())),
                None => Expr::Missing,
            },
            Some("ParameterConstant") => Expr::Constant(name()),
            Some("ParameterBoolean") => Expr::Boolean(node.get("value").and_then(Value::as_bool).unwrap_or(false)),
            Some("ParameterFunction") => {
                let function = node.get("name").map(plain).unwrap_or_default();
                let args = node
                    .get("operands")
                    .and_then(Value::as_array)
                    .unwrap_or_default()
                    .iter()
                    .map(|op| Box::new(Expr::build(segment, op.target().and_then(|id| segment.node(id)), depth + 1)))
                    .collect();
                Expr::Function { name: function, args }
            }
            Some("ParameterUnaryMinus") => Expr::Negate(sub("ref_value")),
            Some("ParameterOperationPowerIdent") => Expr::PowerIdent(sub("ref_operand1")),
            Some(t) if t.starts_with("ParameterOperation") => {
                Expr::Operation { op: name(), lhs: sub("ref_operand1"), rhs: sub("ref_operand2") }
            }
            Some("Parameter") => Expr::Ref(name()),
            _ => Expr::Unknown(node.label()),
        }
    }
}

/// Enum fields hold the name when the code is known, else the number.
fn plain(v: &Value) -> String {
    v.as_str().map_or_else(|| v.to_string(), str::to_owned)
}

/// Shortest decimal form, with float noise from unit scaling removed.
fn number(v: f64) -> String {
    let r = (v * 1e9).round() / 1e9;
    if r == r.trunc() && r.abs() < 1e15 {
        format!("{}", r as i64)
    } else {
        format!("{r}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Value { value, unit } if unit.is_empty() => f.write_str(&number(*value)),
            Expr::Value { value, unit } => write!(f, "{} {unit}", number(*value)),
            Expr::Ref(name) | Expr::Constant(name) => f.write_str(name),
            Expr::Boolean(b) => f.write_str(if *b { "True" } else { "False" }),
            Expr::Function { name, args } => {
                write!(f, "{name}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{a}")?;
                }
                f.write_str(")")
            }
            Expr::Negate(x) => write!(f, "-{x}"),
            Expr::PowerIdent(x) => write!(f, "{x}"),
            Expr::Operation { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Expr::Unknown(label) => write!(f, "<{label}>"),
            Expr::Missing => f.write_str("?"),
        }
    }
}

/// A model parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: NodeId,
    pub name: String,
    pub unit: Option<Unit>,
    /// Internal units.
    pub nominal: f64,
    pub model: f64,
    pub tolerance: String,
    pub expr: Expr,
}

impl Parameter {
    pub fn from_node(segment: &Segment, node: &Node) -> Self {
        Self {
            id: node.id,
            name: node.name.clone().unwrap_or_default(),
            unit: segment.follow(node, "ref_unit").and_then(|u| Unit::from_node(segment, u, 0)),
            nominal: node.f64("value_nominal").unwrap_or(0.0),
            model: node.f64("value_model").unwrap_or(0.0),
            tolerance: node.get("tolerance").map(plain).unwrap_or_default(),
            expr: Expr::build(segment, segment.follow(node, "ref_value"), 0),
        }
    }

    pub fn formula(&self) -> String { self.expr.to_string() }

    /// Nominal value in the parameter's own unit.
    pub fn nominal_in_unit(&self) -> f64 {
        self.unit.as_ref().map_or(self.nominal, |u| u.to_unit(self.nominal))
    }

    pub fn unit_symbol(&self) -> &str {
        self.unit.as_ref().map_or("", |u| u.symbol.as_str())
    }
}

/// Parameters and units of one segment.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
    units: HashMap<NodeId, Unit>,
}

impl ParameterSet {
    pub fn from_segment(segment: &Segment) -> Self {
        let parameters = segment.nodes_of_type("Parameter").map(|n| Parameter::from_node(segment, n)).collect();
        let units = segment
            .nodes()
            .iter()
            .filter(|n| n.type_name.as_deref().is_some_and(|t| t.starts_with("Unit")))
            .filter_map(|n| Unit::from_node(segment, n, 0))
            .map(|u| (u.id, u))
            .collect();
        Self { parameters, units }
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> { self.parameters.iter() }

    pub fn unit(&self, id: NodeId) -> Option<&Unit> { self.units.get(&id) }

    pub fn len(&self) -> usize { self.parameters.len() }

    pub fn is_empty(&self) -> bool { self.parameters.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ByteRange, NodeRef, RefKind, TypeId};
    use crate::segment::{SegmentKind, SegmentStats};
    use pretty_assertions::assert_eq;

    fn child(index: u32) -> Value {
        let mut r = NodeRef::new(RefKind::Child, index, false);
        r.target = Some(NodeId(index));
        Value::Ref(r)
    }

    fn node(id: u32, type_name: &str) -> Node {
        Node::new(NodeId(id), TypeId(0), ByteRange { offset: 0, len: 0 }).with_type_name(type_name)
    }

    fn named(mut n: Node, name: &str) -> Node {
        n.name = Some(name.to_string());
        n
    }

    fn segment(nodes: Vec<Node>) -> Segment {
        Segment {
            name: "DC".into(),
            kind: SegmentKind::Dc,
            nodes,
            stats: SegmentStats::default(),
            defects: Vec::new(),
            data: Vec::new(),
        }
    }

    fn millimeter(id: u32) -> Node {
        node(id, "UnitMilliMeter")
            .with_attribute("unit", "mm")
            .with_attribute("unit_offset", 0.0)
            .with_attribute("unit_factor", 0.1)
    }

    /// d1 = d0 * 2 mm
    fn model() -> Segment {
        segment(vec![
            node(0, "Root"),
            named(node(1, "Parameter"), "d1")
                .with_attribute("ref_unit", child(5))
                .with_attribute("ref_value", child(2))
                .with_attribute("value_nominal", 1.0)
                .with_attribute("tolerance", "Nominal"),
            named(node(2, "ParameterOperationMul"), "*")
                .with_attribute("ref_operand1", child(3))
                .with_attribute("ref_operand2", child(4)),
            node(3, "ParameterRef").with_attribute("ref_parameter", child(6)),
            node(4, "ParameterValue").with_attribute("ref_unit", child(5)).with_attribute("value", 0.2),
            millimeter(5),
            named(node(6, "Parameter"), "d0").with_attribute("ref_unit", child(5)),
        ])
    }

    #[test]
    fn test_formula() {
        let set = ParameterSet::from_segment(&model());
        assert_eq!(set.len(), 2);
        let d1 = set.get("d1").unwrap();
        assert_eq!(d1.formula(), "(d0 * 2 mm)");
        assert_eq!(d1.unit_symbol(), "mm");
        assert_eq!(d1.nominal_in_unit(), 10.0);
        assert_eq!(d1.tolerance, "Nominal");
        assert_eq!(set.get("d0").unwrap().expr, Expr::Missing);
    }

    #[test]
    fn test_function_and_negation() {
        let seg = segment(vec![
            node(0, "Root"),
            named(node(1, "Parameter"), "a").with_attribute("ref_value", child(2)),
            node(2, "ParameterFunction")
                .with_attribute("name", "sqrt")
                .with_attribute("operands", Value::Array(vec![child(3)])),
            node(3, "ParameterUnaryMinus").with_attribute("ref_value", child(4)),
            named(node(4, "ParameterConstant"), "pi"),
        ]);
        assert_eq!(ParameterSet::from_segment(&seg).get("a").unwrap().formula(), "sqrt(-pi)");
    }

    #[test]
    fn test_derived_unit() {
        let seg = segment(vec![
            node(0, "Root"),
            millimeter(1),
            node(2, "UnitSecond").with_attribute("unit", "s").with_attribute("unit_factor", 1.0),
            node(3, "Unit")
                .with_attribute("numerators", Value::Array(vec![child(1)]))
                .with_attribute("denominators", Value::Array(vec![child(2), child(2)])),
        ]);
        let set = ParameterSet::from_segment(&seg);
        let u = set.unit(NodeId(3)).unwrap();
        assert_eq!(u.symbol, "mm/s/s");
        assert_eq!(u.factor, 0.1);
    }

    #[test]
    fn test_temperature_conversion() {
        let unit = Unit { id: NodeId(1), symbol: "°C".into(), offset: 273.15, factor: 1.0, supported: true };
        assert_eq!(number(unit.to_unit(293.15)), "20");
    }

    #[test]
    fn test_reference_cycle_terminates() {
        let seg = segment(vec![
            node(0, "Root"),
            named(node(1, "Parameter"), "loop").with_attribute("ref_value", child(2)),
            node(2, "ParameterUnaryMinus").with_attribute("ref_value", child(2)),
        ]);
        let formula = ParameterSet::from_segment(&seg).get("loop").unwrap().formula();
        assert!(formula.ends_with('?'));
    }
}
