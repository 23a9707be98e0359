use super::*;
use approx::assert_relative_eq;

fn square() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ]
}

#[test]
fn tags_parse_case_insensitive_and_reject_unknown() {
    assert_eq!("Catmull-Rom".parse::<CurveType>(), Ok(CurveType::CatmullRom));
    assert_eq!(" b-spline ".parse::<CurveType>(), Ok(CurveType::BSpline));
    assert_eq!(
        "nurbs".parse::<CurveType>(),
        Err(SplineError::UnsupportedCurveType("nurbs".into()))
    );
    for ty in CurveType::ALL {
        assert_eq!(ty.as_str().parse::<CurveType>(), Ok(ty));
    }
}

#[test]
fn too_few_points_evaluate_to_none() {
    let points = &square()[..3];
    assert!(evaluate(CurveType::CatmullRom, points, 0.5).is_none());
    assert!(evaluate(CurveType::Polyline, &points[..1], 0.0).is_none());
    assert_eq!(CurveType::BSpline.domain_length(3), 0.0);
}

#[test]
fn catmull_rom_interpolates_control_points() {
    let points = square();
    for (i, p) in points.iter().enumerate() {
        let q = evaluate(CurveType::CatmullRom, &points, i as f32).expect("Kurve");
        assert_relative_eq!(q.x, p.x, epsilon = 1e-4);
        assert_relative_eq!(q.y, p.y, epsilon = 1e-4);
    }
}

#[test]
fn open_curves_clamp_out_of_domain_parameters() {
    let points = square();
    let before = evaluate(CurveType::CatmullRom, &points, -5.0).expect("Kurve");
    let after = evaluate(CurveType::CatmullRom, &points, 99.0).expect("Kurve");
    assert_eq!(before, points[0]);
    assert_relative_eq!(after.x, 0.0, epsilon = 1e-4);
    assert_relative_eq!(after.y, 10.0, epsilon = 1e-4);
}

#[test]
fn closed_curves_wrap_parameter() {
    let points = square();
    for ty in [CurveType::ClosedCatmullRom, CurveType::ClosedBSpline] {
        let length = ty.domain_length(points.len());
        assert_relative_eq!(length, 4.0);
        let a = evaluate(ty, &points, 0.75).expect("Kurve");
        let b = evaluate(ty, &points, 0.75 + length).expect("Kurve");
        let c = evaluate(ty, &points, 0.75 - 2.0 * length).expect("Kurve");
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
        assert_relative_eq!(a.x, c.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, c.y, epsilon = 1e-4);
    }
}

#[test]
fn closed_curve_end_meets_start() {
    let points = square();
    let start = evaluate(CurveType::ClosedBSpline, &points, 0.0).expect("Kurve");
    let end = evaluate(CurveType::ClosedBSpline, &points, 3.9999).expect("Kurve");
    assert_relative_eq!(start.x, end.x, epsilon = 1e-2);
    assert_relative_eq!(start.y, end.y, epsilon = 1e-2);
}

#[test]
fn bezier_passes_through_segment_endpoints_and_ignores_extra_points() {
    let mut points = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 5.0),
        Vec2::new(5.0, 5.0),
        Vec2::new(5.0, 0.0),
        Vec2::new(8.0, 0.0),
    ];
    assert_relative_eq!(CurveType::Bezier.domain_length(points.len()), 1.0);
    let end = evaluate(CurveType::Bezier, &points, 1.0).expect("Kurve");
    assert_eq!(end, Vec2::new(5.0, 0.0));

    points.extend([Vec2::new(10.0, 3.0), Vec2::new(12.0, 0.0)]);
    assert_relative_eq!(CurveType::Bezier.domain_length(points.len()), 2.0);
    let end = evaluate(CurveType::Bezier, &points, 2.0).expect("Kurve");
    assert_eq!(end, Vec2::new(12.0, 0.0));
}

#[test]
fn bspline_midpoint_matches_basis_weights() {
    let points = square();
    // t = 0: (P0 + 4 P1 + P2) / 6
    let p = evaluate(CurveType::BSpline, &points, 0.0).expect("Kurve");
    assert_relative_eq!(p.x, (0.0 + 40.0 + 10.0) / 6.0, epsilon = 1e-4);
    assert_relative_eq!(p.y, (0.0 + 0.0 + 10.0) / 6.0, epsilon = 1e-4);
}

#[test]
fn coincident_points_never_produce_nan() {
    let same = Vec2::new(3.0, 3.0);
    let points = vec![same, same, same, same, Vec2::new(4.0, 3.0)];
    for ty in CurveType::ALL {
        let length = ty.domain_length(points.len());
        for i in 0..=40 {
            let t = length * i as f32 / 40.0;
            let p = evaluate(ty, &points, t).expect("Kurve");
            assert!(p.is_finite(), "{ty} lieferte {p:?} bei t={t}");
        }
    }
}

#[test]
fn nan_parameter_is_treated_as_zero() {
    let points = square();
    let p = evaluate(CurveType::Polyline, &points, f32::NAN).expect("Kurve");
    assert_eq!(p, points[0]);
}

fn wavy() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 9.0),
        Vec2::new(11.0, 7.0),
        Vec2::new(15.0, -3.0),
        Vec2::new(21.0, -6.0),
        Vec2::new(26.0, 2.0),
        Vec2::new(30.0, 12.0),
    ]
}

#[test]
fn derivative_matches_central_difference_for_every_family() {
    let points = wavy();
    let h = 5e-3;
    for ty in CurveType::ALL {
        let segments = ty.domain_length(points.len()) as usize;
        assert!(segments > 0, "{ty} ohne Segmente");
        for segment in 0..segments {
            for local in [0.2, 0.5, 0.8] {
                let u = segment as f32 + local;
                let ahead = evaluate(ty, &points, u + h).expect("Kurve");
                let behind = evaluate(ty, &points, u - h).expect("Kurve");
                let numeric = (ahead - behind) / (2.0 * h);
                let analytic = evaluate_derivative(ty, &points, u).expect("Kurve");
                assert_relative_eq!(analytic.x, numeric.x, epsilon = 2e-2, max_relative = 1e-3);
                assert_relative_eq!(analytic.y, numeric.y, epsilon = 2e-2, max_relative = 1e-3);
            }
        }
    }
}

#[test]
fn polyline_derivative_is_segment_direction() {
    let points = wavy();
    let d = evaluate_derivative(CurveType::Polyline, &points, 1.3).expect("Kurve");
    assert_eq!(d, points[2] - points[1]);
}

#[test]
fn catmull_rom_tangent_at_knot_is_half_neighbor_difference() {
    let points = wavy();
    let d = evaluate_derivative(CurveType::CatmullRom, &points, 2.0).expect("Kurve");
    let expected = (points[3] - points[1]) * 0.5;
    assert_relative_eq!(d.x, expected.x, epsilon = 1e-4);
    assert_relative_eq!(d.y, expected.y, epsilon = 1e-4);
}

#[test]
fn closed_bspline_derivative_is_continuous_across_seam() {
    let points = wavy();
    let length = CurveType::ClosedBSpline.domain_length(points.len());
    let before = evaluate_derivative(CurveType::ClosedBSpline, &points, length - 1e-4)
        .expect("Kurve");
    let after = evaluate_derivative(CurveType::ClosedBSpline, &points, 0.0).expect("Kurve");
    assert_relative_eq!(before.x, after.x, epsilon = 1e-2);
    assert_relative_eq!(before.y, after.y, epsilon = 1e-2);
}

#[test]
fn derivative_is_finite_for_collapsed_segments_and_none_below_minimum() {
    let same = Vec2::new(3.0, 3.0);
    let points = vec![same, same, same, same, Vec2::new(4.0, 3.0)];
    for ty in CurveType::ALL {
        let length = ty.domain_length(points.len());
        for i in 0..=20 {
            let t = length * i as f32 / 20.0;
            let d = evaluate_derivative(ty, &points, t).expect("Kurve");
            assert!(d.is_finite(), "{ty} lieferte {d:?} bei t={t}");
        }
    }
    assert!(evaluate_derivative(CurveType::BSpline, &points[..3], 0.5).is_none());
}
