#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use spline_editor::{CurveType, SplineModel, TessellationQuality};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, coords)) = data.split_first() else {
        return;
    };
    let curve_type = CurveType::ALL[selector as usize % CurveType::ALL.len()];

    let mut model = SplineModel::new();
    for chunk in coords.chunks_exact(8).take(64) {
        let x = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let y = f32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
        if x.is_finite() && y.is_finite() && x.abs() < 1e6 && y.abs() < 1e6 {
            model.push_control_point(Vec2::new(x, y));
        }
    }
    let _ = model.set_curve_type(curve_type);

    let tessellation = model.tessellate(TessellationQuality::Tolerance(0.01));
    for p in tessellation.positions() {
        assert!(p.is_finite());
    }
});
