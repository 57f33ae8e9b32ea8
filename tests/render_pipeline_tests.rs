use approx::assert_relative_eq;
use unitplot_rs::PlotError;
use unitplot_rs::core::{AxisScale, PlotDescriptor, SeriesDescriptor};
use unitplot_rs::render::{CATEGORY10, Color, PlotPrimitive, render_plot};
use unitplot_rs::units::UnitTable;

fn line_series(name: &str, x: Vec<f64>, y: Vec<f64>) -> SeriesDescriptor {
    SeriesDescriptor::new(name, x, y).with_style("-")
}

#[test]
fn millimeter_series_collapses_onto_meter_series() {
    let meters = PlotDescriptor::new("Distance", "Height")
        .with_units("m", "m")
        .with_series(line_series("reference", vec![1.0, 2.0], vec![3.0, 4.0]));
    let millimeters = PlotDescriptor::new("Distance", "Height")
        .with_units("mm", "mm")
        .with_series(line_series("scaled", vec![1000.0, 2000.0], vec![3000.0, 4000.0]));

    let rendered = render_plot(&[meters, millimeters], Some("m"), &UnitTable::si())
        .expect("compatible descriptors");

    assert_eq!(rendered.resolved_unit.as_deref(), Some("m"));
    assert_eq!(rendered.primitives.len(), 2);
    let reference = rendered.primitives[0].points();
    let scaled = rendered.primitives[1].points();
    assert_eq!(reference.len(), scaled.len());
    for (a, b) in reference.iter().zip(scaled) {
        assert_relative_eq!(a.x, b.x, max_relative = 1e-12);
        assert_relative_eq!(a.y, b.y, max_relative = 1e-12);
    }
}

#[test]
fn exponents_raise_the_conversion_factor() {
    let descriptor = PlotDescriptor::new("Wavevector", "Power")
        .with_units("mm²", "mm³")
        .with_series(line_series("psd", vec![2.0], vec![5.0]));

    let rendered =
        render_plot(&[descriptor], Some("m"), &UnitTable::si()).expect("compatible units");

    let points = rendered.primitives[0].points();
    assert_relative_eq!(points[0].x, 2.0 * 1e-6, max_relative = 1e-12);
    assert_relative_eq!(points[0].y, 5.0 * 1e-9, max_relative = 1e-12);
}

#[test]
fn mismatched_axis_bases_fail() {
    let descriptor = PlotDescriptor::new("t", "h")
        .with_units("m", "s")
        .with_series(line_series("broken", vec![1.0], vec![1.0]));

    let err = render_plot(&[descriptor], None, &UnitTable::si()).expect_err("m vs s");
    assert!(matches!(err, PlotError::UnitMismatch { .. }));
}

#[test]
fn unconvertible_display_unit_fails() {
    let descriptor = PlotDescriptor::new("t", "h")
        .with_units("m", "m")
        .with_series(line_series("lengths", vec![1.0], vec![1.0]));

    let err = render_plot(&[descriptor], Some("s"), &UnitTable::si()).expect_err("length to time");
    assert!(matches!(err, PlotError::UnconvertibleUnit { .. }));
}

#[test]
fn style_ko_yields_black_line_then_black_circle() {
    let descriptor = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(SeriesDescriptor::new("roughness", vec![1.0], vec![2.0]).with_style("ko"));

    let rendered = render_plot(&[descriptor], None, &UnitTable::si()).expect("valid style");

    assert_eq!(rendered.primitives.len(), 2);
    match &rendered.primitives[0] {
        PlotPrimitive::Line(line) => assert_eq!(line.color, Color::BLACK),
        other => panic!("expected line first, got {other:?}"),
    }
    match &rendered.primitives[1] {
        PlotPrimitive::Symbol(symbol) => assert_eq!(symbol.color, Color::BLACK),
        other => panic!("expected symbol second, got {other:?}"),
    }
}

#[test]
fn default_display_unit_comes_from_first_descriptor() {
    let micrometers = PlotDescriptor::new("Distance", "Height")
        .with_units("µm", "µm")
        .with_series(line_series("fine", vec![1.0], vec![1.0]));
    let nanometers = PlotDescriptor::new("Distance", "Height")
        .with_units("nm", "nm")
        .with_series(line_series("finer", vec![1000.0], vec![1000.0]));

    let rendered =
        render_plot(&[micrometers, nanometers], None, &UnitTable::si()).expect("valid render");

    assert_eq!(rendered.resolved_unit.as_deref(), Some("µm"));
    let finer = rendered.primitives[1].points();
    assert_relative_eq!(finer[0].x, 1.0, max_relative = 1e-12);
    assert_relative_eq!(finer[0].y, 1.0, max_relative = 1e-12);
}

#[test]
fn axis_labels_carry_the_display_unit() {
    let descriptor = PlotDescriptor::new("Distance", "Volume")
        .with_units("µm", "µm³")
        .with_series(line_series("pores", vec![1.0], vec![1.0]));

    let rendered = render_plot(&[descriptor], None, &UnitTable::si()).expect("valid render");

    assert_eq!(rendered.x_axis.label, "Distance (µm)");
    assert_eq!(rendered.y_axis.label, "Volume (µm³)");
}

#[test]
fn unitless_render_has_no_resolved_unit() {
    let descriptor = PlotDescriptor::new("Index", "Count")
        .with_series(line_series("histogram", vec![1.0, 2.0], vec![5.0, 7.0]));

    let rendered = render_plot(&[descriptor], None, &UnitTable::si()).expect("valid render");

    assert_eq!(rendered.resolved_unit, None);
    assert_eq!(rendered.x_axis.label, "Index");
    assert_eq!(rendered.y_axis.label, "Count");
}

#[test]
fn axis_scale_types_pass_through() {
    let descriptor = PlotDescriptor::new("q", "C")
        .with_units("m", "m")
        .with_scales(AxisScale::Log, AxisScale::Log)
        .with_series(line_series("psd", vec![1.0], vec![1.0]));

    let rendered = render_plot(&[descriptor], None, &UnitTable::si()).expect("valid render");

    assert_eq!(rendered.x_axis.scale, AxisScale::Log);
    assert_eq!(rendered.y_axis.scale, AxisScale::Log);
}

#[test]
fn palette_assignment_is_first_seen_by_name() {
    let descriptor = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(line_series("first", vec![1.0], vec![1.0]))
        .with_series(line_series("second", vec![1.0], vec![1.0]))
        .with_series(line_series("first", vec![2.0], vec![2.0]));

    let rendered = render_plot(&[descriptor], None, &UnitTable::si()).expect("valid render");

    assert_eq!(rendered.primitives[0].color(), CATEGORY10[0]);
    assert_eq!(rendered.primitives[1].color(), CATEGORY10[1]);
    // Repeated name resolves to its original slot.
    assert_eq!(rendered.primitives[2].color(), CATEGORY10[0]);
}

#[test]
fn explicit_style_color_does_not_consume_a_palette_slot() {
    let descriptor = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(SeriesDescriptor::new("fixed", vec![1.0], vec![1.0]).with_style("r-"))
        .with_series(line_series("auto", vec![1.0], vec![1.0]));

    let rendered = render_plot(&[descriptor], None, &UnitTable::si()).expect("valid render");

    assert_eq!(rendered.primitives[0].color(), Color::RED);
    assert_eq!(rendered.primitives[1].color(), CATEGORY10[0]);
}

#[test]
fn empty_style_emits_no_primitives() {
    let descriptor = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(SeriesDescriptor::new("hidden", vec![1.0], vec![1.0]))
        .with_series(line_series("visible", vec![1.0], vec![1.0]));

    let rendered = render_plot(&[descriptor], None, &UnitTable::si()).expect("valid render");

    assert_eq!(rendered.primitives.len(), 1);
    assert_eq!(rendered.primitives[0].name(), "visible");
}

#[test]
fn style_errors_surface_to_the_caller() {
    let descriptor = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(SeriesDescriptor::new("broken", vec![1.0], vec![1.0]).with_style("-z"));

    let err = render_plot(&[descriptor], None, &UnitTable::si()).expect_err("z is not a token");
    assert!(matches!(err, PlotError::StyleParse { character: 'z', .. }));
}

#[test]
fn unequal_series_arrays_are_invalid() {
    let descriptor = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(line_series("ragged", vec![1.0, 2.0], vec![1.0]));

    let err = render_plot(&[descriptor], None, &UnitTable::si()).expect_err("length mismatch");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn primitive_order_follows_input_order() {
    let first = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(line_series("a", vec![1.0], vec![1.0]))
        .with_series(line_series("b", vec![1.0], vec![1.0]));
    let second = PlotDescriptor::new("x", "y")
        .with_units("m", "m")
        .with_series(line_series("c", vec![1.0], vec![1.0]));

    let rendered = render_plot(&[first, second], None, &UnitTable::si()).expect("valid render");

    let names: Vec<&str> = rendered.primitives.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn empty_input_renders_an_empty_plot() {
    let rendered = render_plot(&[], Some("m"), &UnitTable::si()).expect("empty input");

    assert!(rendered.primitives.is_empty());
    assert_eq!(rendered.resolved_unit.as_deref(), Some("m"));
    assert_eq!(rendered.x_axis.label, "");
}
