//! Sketch entities, geometric constraints and dimensions, 2D and 3D.

use crate::decoder::{Decoder, Item, NodeReader};
use crate::model::Value;
use crate::Result;

/// TwoPointDistanceDimConstraint
fn dimension_horizontal_distance2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Dimension_Horizontal_Distance2D")?;
    r.cross_ref("ref_entity1")?;
    r.cross_ref("ref_entity2")?;
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    r.u32_array("a0", 4)?;
    Ok(())
}

/// SketchFixedSpline3D
fn spline3d_fixed(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch3d_entity_header("Spline3D_Fixed")?;
    r.list2("points", Item::CrossRef)?;
    r.skip_block_size();
    r.u32("u32_1")?;
    r.u8("u8_0")?;
    r.u32("u32_2")?;
    Ok(())
}

/// SymmetryConstraint
fn geometric_symmetry_line2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_SymmetryLine2D")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.cross_ref("ref_line_sym")?;
    Ok(())
}

/// GroundConstraint
fn geometric_fix2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Fix2D")?;
    r.cross_ref("ref_point")?;
    Ok(())
}

/// LineLengthDimConstraint3D
fn dimension_length3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_3d("Dimension_Length3D")?;
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_1")?;
    r.u8("u8_0")?;
    Ok(())
}

/// OffsetDimConstraint
fn dimension_distance2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Dimension_Distance2D")?;
    r.u32("u32_0")?;
    r.cross_ref("ref_entity1")?;
    r.cross_ref("ref_entity2")?;
    r.u32_array("a0", 4)?;
    r.skip_block_size();
    r.f64_array("a1", 2)?;
    r.f64_array("a2", 2)?;
    Ok(())
}

/// SketchArc
fn arc2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch2d_entity_header("Arc2D")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    if r.version() > 2012 {
        r.list2("lst0", Item::CrossRef)?;
    } else {
        r.skip_block_size();
    }
    r.cross_ref("ref_center")?;
    r.f64("r")?;
    r.u8("u8_0")?;
    r.skip_block_size();
    Ok(())
}

/// MidpointConstraint
fn geometric_symmetry_point2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_SymmetryPoint2D")?;
    r.cross_ref("ref_object")?;
    r.cross_ref("ref_point")?;
    if r.version() > 2015 {
        r.skip(4);
    }
    Ok(())
}

/// TextBox
fn text2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Text2D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_point")?;
    r.cross_ref("ref_text")?;
    r.u32_array("a0", 2)?;
    Ok(())
}

/// ConcentricConstraint3D
fn geometric_radius3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Geometric_Radius3D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_group")?;
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_sketch")?;
    if r.version() > 2012 {
        r.map6("lst1", Item::CrossRef, Item::F64)?;
        r.map6("lst2", Item::CrossRef, Item::U32)?;
    } else {
        r.set_default("lst1", Value::Array(Vec::new()));
        r.set_default("lst0", Value::Array(Vec::new()));
    }
    Ok(())
}

/// ParallelConstraint3D
fn geometric_parallel3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_3d("Geometric_Parallel3D")?;
    if r.version() > 2016 {
        r.skip(4);
    }
    Ok(())
}

/// TwoPointDistanceDimConstraint
fn dimension_vertical_distance2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Dimension_Vertical_Distance2D")?;
    r.cross_ref("ref_entity1")?;
    r.cross_ref("ref_entity2")?;
    r.skip_block_size();
    r.cross_ref("ref_parameter")?;
    r.u32_array("a0", 4)?;
    Ok(())
}

fn sketch3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Sketch3D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("num_entities")?;
    r.list8("entities", Item::CrossRef)?;
    r.skip_block_size();
    r.f32_array("a0", 2)?;
    if r.version() > 2011 {
        r.skip(6 * 8);
    }
    Ok(())
}

fn sketch2_d_placement_plane(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Sketch2DPlacementPlane");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.cross_ref("ref_transformation1")?;
    r.cross_ref("ref_transformation2")?;
    r.skip_block_size();
    r.u16_array("a1", 7)?;
    r.skip_block_size();
    r.cross_ref("ref_plane")?;
    Ok(())
}

/// SketchOffsetSpline
fn offset_spline2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch2d_entity_header("OffsetSpline2D")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    if r.version() > 2012 {
        r.list2("lst0", Item::CrossRef)?;
    } else {
        r.skip_block_size();
        r.set_default("lst0", Value::Array(Vec::new()));
    }
    r.cross_ref("ref_entity")?;
    r.f64("x")?;
    Ok(())
}

/// OffsetSplineDimConstraint
fn dimension_offset_spline2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Dimension_OffsetSpline2D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_group")?;
    r.skip_block_size();
    r.skip_block_size();
    if r.version() > 2012 {
        r.map6("lst0", Item::CrossRef, Item::U32)?;
        r.map6("lst1", Item::CrossRef, Item::U32)?;
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    r.cross_ref("ref_parameter")?;
    r.u32("u32_0")?;
    r.cross_ref("ref_4")?;
    Ok(())
}

/// EqualRadiusConstraint
fn geometric_equal_radius2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_EqualRadius2D")?;
    r.cross_ref("ref_circle1")?;
    r.cross_ref("ref_circle2")?;
    Ok(())
}

/// SketchEllipse
fn ellipse2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch2d_entity_header("Ellipse2D")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    r.skip_block_size();
    if r.version() > 2012 {
        r.list2("lst1", Item::CrossRef)?;
    } else {
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    r.cross_ref("ref_center")?;
    r.f64_array("d_a", 2)?;
    r.f64("a")?;
    r.f64("b")?;
    r.u8("u8_0")?;
    Ok(())
}

fn spline3d_bezier(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Spline3D_Bezier");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_group")?;
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_sketch")?;
    if r.version() > 2012 {
        r.map6("lst0", Item::U32, Item::CrossRef)?;
        r.map6("lst1", Item::U32, Item::CrossRef)?;
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.set_default("lst1", Value::Array(Vec::new()));
        r.skip_block_size();
    }
    r.u16("u16_0")?;
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_bezier")?;
    Ok(())
}

/// OffsetConstraint
fn geometric_offset2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Offset2D")?;
    r.cross_ref("ref_entity1")?;
    r.cross_ref("ref_entity2")?;
    r.cross_ref("ref_entity3")?;
    r.cross_ref("ref_entity4")?;
    Ok(())
}

/// PatternConstraint
fn geometric_polygon_center2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Geometric_PolygonCenter2D");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.skip_block_size();
    r.cross_ref("ref_entity1")?;
    r.cross_ref("ref_entity2")?;
    Ok(())
}

/// TwoLineAngleDimConstraint
fn dimension_angle2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Dimension_Angle2D")?;
    r.u32("u32_0")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.f64("x")?;
    r.f64("y")?;
    r.u16("u16_0")?;
    Ok(())
}

/// CollinearConstraint
fn geometric_collinear2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Collinear2D")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.u16("s16_0")?;
    Ok(())
}

/// PerpendicularConstraint3D
fn geometric_perpendicular3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_3d("Geometric_Perpendicular3D")?;
    Ok(())
}

/// VerticalAlignConstraint
fn geometric_vertical2_align2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Vertical2Align2D")?;
    r.cross_ref("ref_point1")?;
    r.cross_ref("ref_point2")?;
    r.skip_block_size();
    Ok(())
}

/// RadiusDimConstraint
fn dimension_radius2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Dimension_Radius2D")?;
    r.u32("u32_1")?;
    r.cross_ref("ref_circle")?;
    r.u32_array("a0", 4)?;
    Ok(())
}

/// TangentConstraint3D
fn geometric_tangential3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_3d("Geometric_Tangential3D")?;
    if r.version() < 2013 {
        r.skip(1);
    }
    r.cross_ref("ref_parameter")?;
    if r.version() < 2013 {
        r.skip(1);
    }
    r.u32("u32_0")?;
    r.u8("u8_1")?;
    Ok(())
}

/// DiameterDimConstraint
fn dimension_diameter2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Dimension_Diameter2D")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_circle")?;
    r.u32_array("a0", 4)?;
    Ok(())
}

/// TextBoxConstraint
fn geometric_text_box2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_TextBox2D")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.cross_ref("ref_line3")?;
    r.cross_ref("ref_line4")?;
    r.cross_ref("ref_point1")?;
    r.cross_ref("ref_point2")?;
    r.cross_ref("ref_point3")?;
    r.cross_ref("ref_point4")?;
    r.u8("u8_0")?;
    r.f64("x")?;
    Ok(())
}

/// SplineFitPointConstraint
fn geometric_spline_fit_point2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_SplineFitPoint2D")?;
    r.cross_ref("ref_spline")?;
    r.cross_ref("ref_point")?;
    Ok(())
}

/// HorizontalAlignConstraint
fn geometric_horizontal_align2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_HorizontalAlign2D")?;
    r.cross_ref("ref_point1")?;
    r.cross_ref("ref_point2")?;
    r.skip_block_size();
    Ok(())
}

/// PlanarSketch
fn sketch2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Sketch2D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u32("num_entities")?;
    r.list8("entities", Item::CrossRef)?;
    r.skip_block_size();
    r.cross_ref("ref_transformation")?;
    r.cross_ref("ref_direction")?;
    r.u32_array("a0", 2)?;
    if r.version() > 2012 {
        r.list2("lst1", Item::CrossRef)?;
    } else {
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    Ok(())
}

fn group2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Group2D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_1")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.map6("lst1", Item::CrossRef, Item::U32)?;
    r.u32("u32_0")?;
    Ok(())
}

/// CoincidentConstraint
fn geometric_coincident2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Coincident2D")?;
    r.cross_ref("ref_object")?;
    r.cross_ref("ref_point")?;
    Ok(())
}

/// ParallelConstraint
fn geometric_parallel2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Parallel2D")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.u16("u16_0")?;
    Ok(())
}

/// PerpendicularConstraint
fn geometric_perpendicular2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Perpendicular2D")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    r.u16("u16_0")?;
    Ok(())
}

/// TangentConstraint
fn geometric_tangential2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Tangential2D")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    if r.version() > 2012 {
        r.skip(4);
    }
    Ok(())
}

/// HorizontalConstraint
fn geometric_horizontal2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Horizontal2D")?;
    r.cross_ref("ref_line")?;
    r.u8("u8_0")?;
    Ok(())
}

/// VerticalConstraint
fn geometric_vertical2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Vertical2D")?;
    r.cross_ref("ref_line")?;
    r.u8("u8_0")?;
    Ok(())
}

fn circle3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Circle3D");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.u32("u32_0")?;
    r.cross_ref("ref_sketch")?;
    if r.version() > 2017 {
        r.skip(4);
    } else {
        r.skip_block_size();
    }
    r.list2("points", Item::CrossRef)?;
    r.skip_block_size();
    r.f64_array("center", 3)?;
    r.f64_array("m1", 3)?;
    r.f64_array("m2", 3)?;
    r.f64_array("m3", 3)?;
    r.cross_ref("ref_center")?;
    Ok(())
}

/// SketchSplineHandle
fn spline_handle2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("SplineHandle2D");
    r.content_header()?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.u16_array("a0", 2)?;
    r.skip_block_size();
    r.cross_ref("ref_sketch")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    if r.version() > 2012 {
        r.list2("lst0", Item::CrossRef)?;
    } else {
        r.skip_block_size();
        r.set_default("lst0", Value::Array(Vec::new()));
    }
    r.f64_array("a1", 4)?;
    r.skip_block_size();
    Ok(())
}

/// HelicalConstraint3D
fn geometric_helical3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Geometric_Helical3D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_group")?;
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_sketch")?;
    r.skip_block_size();
    if r.version() > 2012 {
        r.map6("lst1", Item::CrossRef, Item::U32)?;
        r.map6("lst2", Item::CrossRef, Item::U32)?;
    } else {
        r.set_default("lst1", Value::Array(Vec::new()));
        r.set_default("lst2", Value::Array(Vec::new()));
    }
    r.u8("u8_1")?;
    r.u32("u32_0")?;
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_parameter1")?;
    r.cross_ref("ref_parameter2")?;
    r.cross_ref("ref_parameter3")?;
    r.cross_ref("ref_parameter4")?;
    r.u16_array("a0", 9)?;
    r.cross_ref("ref_1")?;
    Ok(())
}

/// ThreePointAngleDimConstraint
fn dimension_3_point_angle2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Dimension_3PointAngle2D")?;
    r.cross_ref("ref_3")?;
    r.cross_ref("ref_point1")?;
    r.cross_ref("ref_point2")?;
    r.cross_ref("ref_point")?;
    r.f64_array("a0", 2)?;
    r.u16("u16_0")?;
    r.u8("u8_0")?;
    Ok(())
}

/// CoincidentConstraint3D
fn geometric_coincident3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_3d("Geometric_Coincident3D")?;
    if r.version() > 2016 {
        r.skip(4);
    }
    Ok(())
}

/// EqualLengthConstraint
fn geometric_equal_length2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_EqualLength2D")?;
    r.cross_ref("ref_line1")?;
    r.cross_ref("ref_line2")?;
    Ok(())
}

/// SketchLine
fn line2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch2d_entity_header("Line2D")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    r.skip_block_size();
    if r.version() > 2012 {
        r.list2("lst1", Item::CrossRef)?;
    } else {
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    r.f64("x")?;
    r.f64("y")?;
    r.f64("dir_x")?;
    r.f64("dir_y")?;
    Ok(())
}

/// SketchCircle
fn circle2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.sketch2d_entity_header("Circle2D")?;
    r.skip_block_size();
    r.list2("points", Item::CrossRef)?;
    r.skip_block_size();
    if r.version() > 2012 {
        r.list2("lst1", Item::CrossRef)?;
    } else {
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    r.cross_ref("ref_center")?;
    r.f64("r")?;
    r.u8("u8_0")?;
    Ok(())
}

/// CollinearConstraint3D
fn geometric_collinear3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_3d("Geometric_Collinear3D")?;
    Ok(())
}

fn group3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Group3D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.u32("u32_0")?;
    r.skip_block_size();
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    if r.version() > 2016 {
        r.list2("lst1", Item::CrossRef)?;
    } else {
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    r.map6("lst2", Item::CrossRef, Item::U32)?;
    r.u32("u32_1")?;
    Ok(())
}

/// BendConstraint3D
fn geometric_bend3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Geometric_Bend3D");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_group")?;
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_sketch")?;
    if r.version() > 2012 {
        r.map6("lst0", Item::CrossRef, Item::F64)?;
        r.map6("lst1", Item::CrossRef, Item::U32)?;
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    r.cross_ref("ref_parameter")?;
    r.cross_ref("ref_1")?;
    Ok(())
}

/// ConcentricConstraint
fn geometric_radius2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_Radius2D")?;
    r.cross_ref("ref_object")?;
    r.cross_ref("ref_center")?;
    Ok(())
}

/// SmoothConstraint3D
fn geometric_smooth3d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_3d("Geometric_Smooth3D")?;
    r.u16("u16_0")?;
    r.u8("u8_1")?;
    Ok(())
}

fn spline3d_curve(r: &mut NodeReader<'_>) -> Result<()> {
    r.set_type_name("Spline3D_Curve");
    r.content_header()?;
    r.skip_block_size();
    r.i32("s32_0")?;
    r.skip_block_size();
    r.cross_ref("ref_group")?;
    r.skip_block_size();
    r.skip_block_size();
    r.list2("lst0", Item::CrossRef)?;
    r.u8("u8_0")?;
    r.cross_ref("ref_sketch")?;
    if r.version() > 2012 {
        r.map6("lst0", Item::CrossRef, Item::F64)?;
        r.map6("lst1", Item::CrossRef, Item::U32)?;
    } else {
        r.set_default("lst0", Value::Array(Vec::new()));
        r.set_default("lst1", Value::Array(Vec::new()));
    }
    Ok(())
}

/// PatternConstraint
fn geometric_polygon_edge2d(r: &mut NodeReader<'_>) -> Result<()> {
    r.constraint_header_2d("Geometric_PolygonEdge2D")?;
    r.cross_ref("ref_1")?;
    r.cross_ref("ref_2")?;
    r.cross_ref("ref_center")?;
    r.cross_ref("ref_polygon_center1")?;
    r.cross_ref("ref_polygon_center2")?;
    r.u32_array("a1", 2)?;
    Ok(())
}

pub(super) const DECODERS: &[(u32, Decoder)] = &[
    (0x00AC_C000, dimension_horizontal_distance2d),
    (0x0B86_AD43, spline3d_fixed),
    (0x0DDD_7C10, geometric_symmetry_line2d),
    (0x0F17_7BB0, geometric_fix2d),
    (0x10B6_ADEF, dimension_length3d),
    (0x1105_8558, dimension_distance2d),
    (0x1609_15E2, arc2d),
    (0x21E8_70BF, geometric_symmetry_point2d),
    (0x2510_347F, text2d),
    (0x2574_C505, geometric_radius3d),
    (0x33EC_1003, geometric_parallel3d),
    (0x3683_FF40, dimension_vertical_distance2d),
    (0x3AE9_D8DA, sketch3d),
    (0x3D64_CCF0, sketch2_d_placement_plane),
    (0x3E55_D947, offset_spline2d),
    (0x3F4F_A55F, dimension_offset_spline2d),
    (0x442C_7DD0, geometric_equal_radius2d),
    (0x4507_D460, ellipse2d),
    (0x48C5_2258, spline3d_bezier),
    (0x4E4B_14BC, geometric_offset2d),
    (0x5253_4838, geometric_polygon_center2d),
    (0x590D_0A10, dimension_angle2d),
    (0x5A9A_7BE0, geometric_collinear2d),
    (0x6326_6191, geometric_perpendicular3d),
    (0x64DA_5250, geometric_vertical2_align2d),
    (0x671B_B700, dimension_radius2d),
    (0x7457_BB19, geometric_tangential3d),
    (0x74DF_96E0, dimension_diameter2d),
    (0x7A98_AD0E, geometric_text_box2d),
    (0x7C6D_149E, geometric_spline_fit_point2d),
    (0x8F55_A3C0, geometric_horizontal_align2d),
    (0x9087_4D11, sketch2d),
    (0x9087_4D62, group2d),
    (0x9087_4D94, geometric_coincident2d),
    (0x9087_4D95, geometric_parallel2d),
    (0x9087_4D96, geometric_perpendicular2d),
    (0x9087_4D97, geometric_tangential2d),
    (0x9087_4D98, geometric_horizontal2d),
    (0x9087_4D99, geometric_vertical2d),
    (0x9E43_716A, circle3d),
    (0xA644_E76A, spline_handle2d),
    (0xB71C_BEC9, geometric_helical3d),
    (0xBF3B_5C84, dimension_3_point_angle2d),
    (0xC553_8931, geometric_coincident3d),
    (0xC681_C2E0, geometric_equal_length2d),
    (0xCE52_DF3A, line2d),
    (0xCE52_DF3B, circle2d),
    (0xD131_07FE, geometric_collinear3d),
    (0xDB04_EB11, group3d),
    (0xDE81_8CC0, geometric_bend3d),
    (0xE110_8C00, geometric_radius2d),
    (0xE8D3_0910, geometric_smooth3d),
    (0xF94F_F0D9, spline3d_curve),
    (0xFBDB_891F, geometric_polygon_edge2d),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::testing::{self, Bytes};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_is_sorted() {
        assert!(DECODERS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_zero_records_frame() {
        assert!(testing::assert_zero_records_frame(DECODERS) > 0);
    }

    #[test]
    fn test_version_gates() {
        // (key, decoder, release before the gate, length, release after, length)
        let gates: &[(u32, Decoder, u32, usize, u32, usize)] = &[
            (0xC553_8931, geometric_coincident3d, 2016, 67, 2017, 71),
            (0x33EC_1003, geometric_parallel3d, 2016, 67, 2017, 71),
            (0xDB04_EB11, group3d, 2016, 74, 2017, 78),
            (0xCE52_DF3A, line2d, 2012, 98, 2013, 102),
            (0x21E8_70BF, geometric_symmetry_point2d, 2015, 66, 2016, 70),
            (0x7457_BB19, geometric_tangential3d, 2012, 74, 2013, 76),
            (0x9087_4D97, geometric_tangential2d, 2012, 66, 2013, 70),
            (0x3AE9_D8DA, sketch3d, 2011, 74, 2012, 122),
            (0x9E43_716A, circle3d, 2017, 170, 2018, 170),
        ];
        for &(key, decoder, before, before_len, after, after_len) in gates {
            assert_eq!(testing::zero_record_len(key, before, decoder), Some(before_len), "{key:08X} at {before}");
            assert_eq!(testing::zero_record_len(key, after, decoder), Some(after_len), "{key:08X} at {after}");
        }
    }

    #[test]
    fn test_pre_block_size_layouts() {
        assert_eq!(testing::zero_record_len(0xC553_8931, 2010, geometric_coincident3d), Some(39));
        assert_eq!(testing::zero_record_len(0xCE52_DF3A, 2010, line2d), Some(66));
        assert_eq!(testing::zero_record_len(0x9E43_716A, 2010, circle3d), Some(138));
    }

    #[test]
    fn test_coincident3d_trailing_word_from_2017() {
        let header: Decoder = |r| r.constraint_header_3d("Coincident3D");
        for (version, extra) in [(2012, 0), (2016, 0), (2017, 4), (2019, 4)] {
            let header_len = testing::zero_record_len(1, version, header).unwrap();
            let used = testing::zero_record_len(0xC553_8931, version, geometric_coincident3d);
            assert_eq!(used, Some(header_len + extra), "{version}");
        }
    }

    #[test]
    fn test_group3d_second_list_from_2017() {
        let b = Bytes::new(2017)
            .content(1)
            .block()
            .i32(0)
            .block()
            .block()
            .u32(2)
            .block()
            .block()
            .block()
            .ref_list(&[3])
            .ref_list(&[4, 5])
            .empty_list()
            .u32(8);
        let (node, res, used) = testing::decode(0xDB04_EB11, 2017, &b.data, group3d);
        res.unwrap();
        assert_eq!(used, b.data.len());
        assert_eq!(node.get("lst0").map(Value::len), Some(1));
        assert_eq!(node.get("lst1").map(Value::len), Some(2));
        assert_eq!(node.get("lst2"), Some(&Value::Map(vec![])));
        assert_eq!(node.get("u32_1"), Some(&Value::U32(8)));

        let (node, res, _) = testing::decode(0xDB04_EB11, 2016, &vec![0; 74], group3d);
        res.unwrap();
        assert_eq!(node.get("lst1"), Some(&Value::Array(vec![])));
    }
}
