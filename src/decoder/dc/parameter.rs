//! Units, parameters and the nodes of parameter expressions.
//!
//! A parameter points at an expression tree built from value, reference,
//! function and operation nodes. Each expression node carries a unit,
//! which is either one of the fixed unit records below or a derived
//! `Unit` made of numerator and denominator lists.

use std::f64::consts::PI;

use crate::decoder::{Decoder, Item, NodeReader};
use crate::model::Value;
use crate::Result;

/// A fixed unit record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub key: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Added before scaling; non-zero only for temperatures.
    pub offset: f64,
    /// Scale to the internal base unit (cm, kg, s, rad, ...).
    pub factor: f64,
    /// Whether the symbol is understood by downstream unit parsers.
    pub supported: bool,
}

const fn unit(key: u32, symbol: &'static str, name: &'static str, offset: f64, factor: f64, supported: bool) -> UnitDef {
    UnitDef { key, symbol, name, offset, factor, supported }
}

pub const UNITS: &[UnitDef] = &[
    // length
    unit(0x6241_20BC, "mm", "MilliMeter", 0.0, 0.1, true),
    unit(0xF8A7_79F5, "m", "Meter", 0.0, 100.0, true),
    unit(0xF8A7_79F6, "in", "Inch", 0.0, 2.54, true),
    unit(0xF8A7_79F7, "ft", "Foot", 0.0, 30.48, true),
    unit(0x5DFE_5E70, "mil", "Mil", 0.0, 0.00254, true),
    unit(0x5C30_CE17, "sm", "SeaMile", 0.0, 185324.5218, true),
    // mass
    unit(0xF8A7_79F1, "g", "Gram", 0.0, 0.001, true),
    unit(0xF8A7_79F2, "slug", "Slug", 0.0, 14.5939, true),
    // Exact avoirdupois pound in kg; intentionally not 0.428334865.
    unit(0xF8A7_79F3, "lb", "Pound", 0.0, 0.45359237, true),
    unit(0x5C30_CE22, "oz", "Ounce", 0.0, 0.028349525, true),
    // time
    unit(0x5F9D_0025, "s", "Second", 0.0, 1.0, true),
    unit(0x5F9D_0026, "min", "Minute", 0.0, 60.0, true),
    unit(0x5F9D_0027, "h", "Hour", 0.0, 3600.0, true),
    // temperature
    unit(0x5F9D_0029, "K", "Kelvin", 0.0, 1.0, true),
    unit(0x5F9D_002A, "°C", "Celsius", 273.15, 1.0, true),
    unit(0x5F9D_002B, "°F", "Fahrenheit", 459.67, 5.0 / 9.0, true),
    // angle
    unit(0x5C30_CDF2, "rad", "Radian", 0.0, 1.0, true),
    unit(0x5C30_CDF0, "°", "Degree", 0.0, PI / 180.0, true),
    unit(0x3D0B_9C8D, "gon", "Gradian", 0.0, PI / 200.0, true),
    unit(0x5C30_CDF6, "°", "Grad", 0.0, PI / 180.0, true),
    unit(0xD715_5C2A, "sr", "Steradian", 0.0, 1.0, false),
    // velocity
    unit(0x4D4F_962F, "m/s", "Meter/Second", 0.0, 100.0, true),
    unit(0xA116_EF37, "f/s", "Feet/Second", 0.0, 30.48, true),
    unit(0x4D4F_9631, "mil/h", "Miles/Hour", 0.0, 44.72399926, true),
    unit(0xE184_89FC, "1/min", "Revolution/Minute", 0.0, PI / 30.0, true),
    // area and volume
    unit(0xF0F5_A577, "circ.mil", "CircularMil", 0.0, 1.0 / 1973525004.0, false),
    unit(0x40AF_EBA9, "gal", "Gallon", 0.0, 1.0 / 264.1706, false),
    unit(0x40AF_EBAA, "dm^3", "Liter", 0.0, 1.0, true),
    // force
    unit(0x40AF_EBA3, "N", "Newton", 0.0, 1.0, true),
    unit(0x40AF_EBA2, "dyn", "Dyn", 0.0, 1.0, false),
    unit(0x40AF_EBA1, "lbf", "PoundForce", 0.0, 4.44822301540537, true),
    unit(0x40AF_EBA0, "ozf", "OunceForce", 0.0, 0.278013851, false),
    // pressure
    unit(0x2366_3C43, "Pa", "Pascal", 0.0, 1.0, true),
    unit(0x40AF_EBA5, "psi", "PoundForce/SquareInch", 0.0, 6890.0, true),
    unit(0x40AF_EBA4, "ksi", "KiloPoundForce/SquareInch", 0.0, 6890000.0, true),
    // power and energy
    unit(0x40AF_EB9F, "W", "Watt", 0.0, 1.0, true),
    unit(0x40AF_EB9E, "hp", "HorsePower", 0.0, 745.7, false),
    unit(0x40AF_EB9D, "J", "Joule", 0.0, 1.0, true),
    unit(0x40AF_EB9C, "erg", "Erg", 0.0, 1.0, false),
    unit(0x40AF_EB9B, "Cal", "Calories", 0.0, 4.184, false),
    unit(0x40AF_EB9A, "BTU", "BritishThermalUnit", 0.0, 1054.6, false),
    // electrical and magnetic
    unit(0xCEA6_CA2D, "A", "Ampere", 0.0, 1.0, true),
    unit(0x9E5A_8E15, "V", "Volt", 0.0, 1.0, false),
    unit(0xBD37_8B6A, "ohm", "Ohm", 0.0, 1.0, false),
    unit(0xE7A9_656E, "C", "Coulomb", 0.0, 1.0, false),
    unit(0x28FE_BA33, "F", "Farad", 0.0, 1.0, false),
    unit(0x45BD_8053, "y", "Gamma", 0.0, 1.0e-9, false),
    unit(0x5F9F_2379, "Gs", "Gauss", 0.0, 0.0001, false),
    unit(0xDA43_0213, "H", "Henry", 0.0, 1.0, false),
    unit(0x11EB_21E7, "Hz", "Hertz", 0.0, 1.0, false),
    unit(0x2607_2ECF, "maxwell", "Maxwell", 0.0, 1.0e-8, false),
    unit(0x7D8B_C1F7, "mho", "Mho", 0.0, 1.0, false),
    unit(0x9E06_4B0C, "Oe", "Oersted", 0.0, 79.577472, false),
    unit(0x3D79_3814, "S", "Siemens", 0.0, 1.0, false),
    unit(0xFB4E_31FB, "T", "Tesla", 0.0, 1.0, false),
    unit(0x660F_65B6, "Wb", "Weber", 0.0, 1.0, false),
    // light and substance
    unit(0xB7A5_131F, "lx", "Lux", 0.0, 1.0, false),
    unit(0xE9D0_671D, "lm", "Lumen", 0.0, 1.0, false),
    unit(0xF94F_EEE2, "cd", "Candela", 0.0, 1.0, true),
    unit(0x2F6A_0C3F, "mol", "Mol", 0.0, 1.0, true),
    unit(0x5F9D_0023, "", "Empty", 0.0, 1.0, true),
];

pub fn unit_def(key: u32) -> Option<&'static UnitDef> {
    UNITS.iter().find(|u| u.key == key)
}

/// Binary operations: key, type suffix, operator.
pub const OPERATIONS: &[(u32, &str, &str)] = &[
    (0xF8A7_7A06, "Plus", "+"),
    (0xF8A7_7A07, "Minus", "-"),
    (0xF8A7_7A08, "Mul", "*"),
    (0xF8A7_7A09, "Div", "/"),
    (0xF8A7_7A0A, "Modulo", "%"),
    (0xF8A7_7A0B, "Power", "^"),
];

/// Tolerance codes of a model parameter.
pub const TOLERANCES: &[&str] = &["Nominal", "Upper", "Median", "Lower"];

/// Function codes of a `ParameterFunction` node.
pub const FUNCTIONS: &[&str] = &[
    "cos", "sin", "tan", "acos", "asin", "atan", "cosh", "sinh", "tanh", "acosh", "asinh",
    "atanh", "sqrt", "sign", "exp", "floor", "ceil", "round", "abs", "max", "min", "ln", "log",
    "pow", "random", "isolate",
];

/// Canonical spelling of a parameter name. Constants are lower case and
/// umlauts are transliterated so the name is a valid identifier for
/// expression parsers downstream.
pub fn translate(name: &str) -> String {
    match name {
        "PI" => return "pi".to_string(),
        "E" => return "e".to_string(),
        _ => {}
    }
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            'ß' => out.push_str("ss"),
            c => out.push(c),
        }
    }
    out
}

// ============================================================================
// Units
// ============================================================================

fn unit_ref(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("UnitRef");
    r.header0()?;
    r.skip_block_size();
    r.f64("magnitude")?;
    r.f64("factor")?;
    r.skip_block_size();
    r.set("unit", "");
    r.set("unit_offset", 0.0);
    r.set("unit_factor", 1.0);
    r.set("unit_supported", true);
    Ok(())
}

/// Shared by every fixed unit key; the table entry is found through the
/// node's own type key.
fn fixed_unit(r: &mut NodeReader<'_>) -> Result<()> {
    unit_ref(r)?;
    r.skip_block_size();
    if let Some(def) = unit_def(r.node().type_id.0) {
        r.set_type_name(format!("Unit{}", def.name));
        r.set("unit", def.symbol);
        r.set("unit_offset", def.offset);
        r.set("unit_factor", def.factor);
        r.set("unit_supported", def.supported);
    }
    Ok(())
}

fn derived_unit(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Unit");
    r.header0()?;
    r.skip_block_size();
    r.list3("numerators", Item::ChildRef)?;
    r.list3("denominators", Item::ChildRef)?;
    r.boolean("visible")?;
    r.child_ref("ref_derived")?;
    Ok(())
}

// ============================================================================
// Parameters
// ============================================================================

/// Apply [`translate`] to the node name, logging each rename.
fn translate_name(r: &mut NodeReader<'_>) {
    let Some(name) = r.name().map(str::to_owned) else { return };
    let translated = translate(&name);
    if translated != name {
        tracing::warn!(node = %r.node().id, from = %name, to = %translated, "translated parameter name");
        r.set_name(translated);
    }
}

fn parameter(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Parameter");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.name16()?;
    translate_name(r);
    r.skip(4);
    r.child_ref("ref_unit")?;
    r.child_ref("ref_value")?;
    r.f64("value_nominal")?;
    r.f64("value_model")?;
    r.enum16("tolerance", TOLERANCES)?;
    r.i16("u16_0")?;
    Ok(())
}

fn parameter_boolean(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterBoolean");
    r.content_header()?;
    if r.version() > 2010 {
        r.name16()?;
        r.skip(4);
    } else {
        r.set_name("");
        r.skip(12);
    }
    r.boolean("value")?;
    Ok(())
}

fn parameter_constant(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterConstant");
    r.header0()?;
    r.child_ref("ref_unit")?;
    r.f64("value")?;
    r.i16("s16_0")?;
    r.u32("u32_0")?;
    let name = r.name16()?;
    match name.as_str() {
        "PI" => r.set_name("pi"),
        "E" => r.set_name("e"),
        _ => {}
    }
    Ok(())
}

fn parameter_comment(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterComment");
    r.header0()?;
    r.u32("u32_0")?;
    r.u32("u32_1")?;
    r.skip_block_size();
    r.parent_ref()?;
    r.cross_ref("ref_1")?;
    r.u32("u32_2")?;
    r.skip_block_size();
    r.name16()?;
    r.skip_block_size();
    Ok(())
}

// ============================================================================
// Expression nodes
// ============================================================================

fn parameter_function(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterFunction");
    r.header0()?;
    r.child_ref("ref_unit")?;
    r.skip_block_size();
    r.list2("operands", Item::ChildRef)?;
    r.skip_block_size();
    r.enum16("name", FUNCTIONS)?;
    r.u16("u16_0")?;
    let first = r.attr("operands").and_then(Value::as_array).and_then(|ops| ops.first()).cloned();
    r.set("ref_operand", first.unwrap_or(Value::Null));
    Ok(())
}

fn parameter_value(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterValue");
    r.header0()?;
    r.child_ref("ref_unit")?;
    r.skip_block_size();
    r.f64("value")?;
    r.u16("type")?;
    if r.version() > 2010 {
        r.skip(4);
    }
    Ok(())
}

fn parameter_ref(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterRef");
    r.header0()?;
    r.child_ref("ref_unit")?;
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    Ok(())
}

fn parameter_unary_minus(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterUnaryMinus");
    r.header0()?;
    r.child_ref("ref_unit")?;
    r.skip_block_size();
    r.child_ref("ref_value")?;
    r.skip_block_size();
    Ok(())
}

/// `x ^ unit`: the operand raised to the power carried by its unit.
fn power_ident(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("ParameterOperationPowerIdent");
    r.set_name("^");
    r.header0()?;
    r.child_ref("ref_unit")?;
    r.skip_block_size();
    r.child_ref("ref_operand1")?;
    r.skip_block_size();
    Ok(())
}

fn operation(r: &mut NodeReader<'_>) -> Result<()> {
    power_ident(r)?;
    r.child_ref("ref_operand2")?;
    r.skip_block_size();
    let key = r.node().type_id.0;
    if let Some(&(_, op, symbol)) = OPERATIONS.iter().find(|(k, ..)| *k == key) {
        r.set_type_name(format!("ParameterOperation{op}"));
        r.set_name(symbol);
    }
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x0229_768D, parameter_comment),
    (0x0AA8_AF46, parameter_constant),
    (0x5F9D_0022, unit_ref),
    (0x9087_4D26, parameter),
    (0x9087_4D28, parameter_boolean),
    (0xF8A7_79FD, derived_unit),
    (0xF8A7_7A03, parameter_function),
    (0xF8A7_7A04, parameter_value),
    (0xF8A7_7A05, parameter_ref),
    (0xF8A7_7A0C, parameter_unary_minus),
    (0xF8A7_7A0D, power_ident),
];

/// Table-driven keys: every fixed unit and every binary operation.
pub(super) fn table_decoders() -> Vec<(u32, Decoder)> {
    UNITS
        .iter()
        .map(|u| (u.key, fixed_unit as Decoder))
        .chain(OPERATIONS.iter().map(|&(key, ..)| (key, operation as Decoder)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::DecodeContext;
    use crate::model::{ByteRange, Node, NodeId, TypeId};
    use pretty_assertions::assert_eq;

    fn run(key: u32, version: u32, data: &[u8], decoder: Decoder) -> (Node, usize) {
        let mut node = Node::new(NodeId(9), TypeId(key), ByteRange { offset: 0, len: data.len() });
        let mut ctx = DecodeContext::for_version(version);
        let mut r = NodeReader::new(data, &mut node, &mut ctx);
        decoder(&mut r).unwrap();
        let left = r.remaining();
        (node, left)
    }

    fn header0(buf: &mut Vec<u8>) {
        buf.extend_from_slice(&[0; 6]);
        buf.extend_from_slice(&[0; 4]);
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("PI"), "pi");
        assert_eq!(translate("E"), "e");
        assert_eq!(translate("Höhe_Größe"), "Hoehe_Groesse");
        assert_eq!(translate("d0"), "d0");
        assert_eq!(translate("Pi"), "Pi");
    }

    #[test]
    fn test_unit_table_keys_are_unique() {
        let mut keys: Vec<u32> = UNITS.iter().map(|u| u.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), UNITS.len());
        assert_eq!(UNITS.len(), 61);
    }

    #[test]
    fn test_pound_is_avoirdupois() {
        let lb = unit_def(0xF8A7_79F3).unwrap();
        assert_eq!(lb.symbol, "lb");
        assert_eq!(lb.factor, 0.45359237);
        let oz = unit_def(0x5C30_CE22).unwrap();
        assert!((16.0 * oz.factor - lb.factor).abs() < 1e-7);
    }

    #[test]
    fn test_fixed_unit_millimeter() {
        let mut data = Vec::new();
        header0(&mut data);
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&1.0f64.to_le_bytes());
        data.extend_from_slice(&1.0f64.to_le_bytes());
        data.extend_from_slice(&[0; 8]);
        let (node, left) = run(0x6241_20BC, 2019, &data, fixed_unit);
        assert_eq!(left, 0);
        assert_eq!(node.type_name.as_deref(), Some("UnitMilliMeter"));
        assert_eq!(node.get("unit"), Some(&Value::from("mm")));
        assert_eq!(node.f64("unit_factor"), Some(0.1));
    }

    #[test]
    fn test_operation_names() {
        let mut data = Vec::new();
        header0(&mut data);
        data.extend_from_slice(&[3, 0, 0, 0]); // unit
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&[4, 0, 0, 0]); // operand 1
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&[5, 0, 0, 0]); // operand 2
        data.extend_from_slice(&[0; 4]);
        let (node, left) = run(0xF8A7_7A08, 2019, &data, operation);
        assert_eq!(left, 0);
        assert_eq!(node.type_name.as_deref(), Some("ParameterOperationMul"));
        assert_eq!(node.name.as_deref(), Some("*"));
        assert_eq!(node.children.len(), 3);
    }

    #[test]
    fn test_parameter_value_version_gate() {
        let mut data = Vec::new();
        header0(&mut data);
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&2.5f64.to_le_bytes());
        data.extend_from_slice(&[1, 0]);
        data.extend_from_slice(&[0; 4]);
        let (node, left) = run(0xF8A7_7A04, 2019, &data, parameter_value);
        assert_eq!(left, 0);
        assert_eq!(node.f64("value"), Some(2.5));

        // 2010: no block sizes, no trailing word
        let mut data = vec![0u8; 10];
        data.extend_from_slice(&2.5f64.to_le_bytes());
        data.extend_from_slice(&[1, 0]);
        let (_, left) = run(0xF8A7_7A04, 2010, &data, parameter_value);
        assert_eq!(left, 0);
    }

    #[test]
    fn test_function_without_operands() {
        let mut data = Vec::new();
        header0(&mut data);
        data.extend_from_slice(&[0; 4]); // unit
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&[0; 4]); // empty operands
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&[12, 0, 0, 0]); // sqrt
        let (node, left) = run(0xF8A7_7A03, 2019, &data, parameter_function);
        assert_eq!(left, 0);
        assert_eq!(node.get("name"), Some(&Value::from("sqrt")));
        assert_eq!(node.get("ref_operand"), Some(&Value::Null));
    }

    #[test]
    fn test_zero_records_frame() {
        use crate::decoder::testing::assert_zero_records_frame;
        assert!(assert_zero_records_frame(DECODERS) > 0);
        assert!(assert_zero_records_frame(&table_decoders()) > 0);
    }
}
