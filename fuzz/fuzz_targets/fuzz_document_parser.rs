#![no_main]

use libfuzzer_sys::fuzz_target;
use spline_editor::core::TessellationSettings;
use spline_editor::{parse_spline_document, write_spline_document, TessellationQuality};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut model) = parse_spline_document(content, TessellationSettings::default()) else {
        return;
    };

    // Gelesene Dokumente müssen sich tessellieren und wieder schreiben lassen
    let _ = model.tessellate(TessellationQuality::Tolerance(0.05));
    let written = write_spline_document(&model).expect("Schreiben darf nicht fehlschlagen");
    let reparsed = parse_spline_document(&written, TessellationSettings::default())
        .expect("Geschriebenes Dokument muss lesbar sein");
    assert_eq!(reparsed.positions(), model.positions());
});
