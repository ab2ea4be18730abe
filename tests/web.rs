//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use string_art::DiskHandle;
use string_art::export::{CHORD_ELEMENTS, POINT_ELEMENTS};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn rejects_too_few_nails() {
    assert!(DiskHandle::new(2, 1.0).is_err());
}

#[wasm_bindgen_test]
fn exported_sizes_track_state() {
    let mut disk = DiskHandle::new(8, 1.0).unwrap();
    assert_eq!(disk.nails_size(), 8 * POINT_ELEMENTS);
    assert_eq!(disk.nail_buffer_len(), 8 * POINT_ELEMENTS);
    assert_eq!(disk.strings_size(), 0);
    assert_eq!(disk.residual_size(), 0);

    let side = disk.side();
    disk.process_pixels(&vec![0; side * side]).unwrap();
    assert_eq!(disk.residual_size(), side * side);

    let drawn = disk.calculate_strings().unwrap();
    assert!(drawn > 0);
    assert!(disk.is_done());
    assert_eq!(disk.strings_size(), drawn * CHORD_ELEMENTS);
    assert_eq!(disk.chord_buffer_len(), drawn * CHORD_ELEMENTS);

    disk.reset();
    assert_eq!(disk.strings_size(), 0);
}

#[wasm_bindgen_test]
fn chord_buffer_reads_back_from_memory() {
    let mut disk = DiskHandle::new(8, 1.0).unwrap();
    let side = disk.side();
    disk.process_pixels(&vec![0; side * side]).unwrap();
    disk.calculate_strings().unwrap();

    let ptr = disk.strings();
    let len = disk.strings_size();
    let chords = unsafe { std::slice::from_raw_parts(ptr, len) };
    assert_eq!(chords[0], 0);
    for pair in chords.chunks(CHORD_ELEMENTS) {
        assert_ne!(pair[0], pair[1]);
        assert!((pair[1] as usize) < disk.nail_count());
    }
}

#[wasm_bindgen_test]
fn bad_buffers_and_missing_images_throw() {
    let mut disk = DiskHandle::new(8, 1.0).unwrap();
    assert!(disk.calculate_strings().is_err());
    assert!(disk.process_pixels(&[1, 2, 3]).is_err());
    assert!(disk.set_pixel_size(0.0).is_err());
    assert_eq!(disk.get_pixel_size(), 1.0);
}

#[wasm_bindgen_test]
fn clearing_the_canvas_keeps_the_chords() {
    let mut disk = DiskHandle::new(8, 1.0).unwrap();
    let side = disk.side();
    disk.process_pixels(&vec![0; side * side]).unwrap();
    disk.calculate_strings().unwrap();
    let size = disk.strings_size();
    let count = disk.chord_count();
    assert!(size > 0);

    disk.clear();

    assert_eq!(disk.strings_size(), size);
    assert_eq!(disk.chord_count(), count);
}

#[wasm_bindgen_test]
fn oversized_budget_throws() {
    let mut disk = DiskHandle::new(8, 1.0).unwrap();
    assert!(disk.set_iterations(usize::MAX).is_err());
    assert!(disk.set_iterations(4).is_ok());
}

#[wasm_bindgen_test]
fn painting_feeds_the_filled_in_buffer() {
    let mut disk = DiskHandle::new(8, 1.0).unwrap();
    let side = disk.side();
    assert_eq!(disk.filled_in_size(), side * side);

    let mid = side as f32 / 2.0;
    assert!(disk.paint(mid, mid));
    let cells = unsafe { std::slice::from_raw_parts(disk.filled_in(), disk.filled_in_size()) };
    assert_eq!(cells.iter().filter(|&&cell| cell == 1).count(), 1);

    assert!(disk.calculate_strings().is_ok());
}

#[wasm_bindgen_test]
fn drawing_without_a_canvas_is_harmless() {
    let disk = DiskHandle::new(8, 1.0).unwrap();
    disk.clear();
    disk.draw_nails();
    disk.draw_canvas().unwrap();
    disk.draw_strings();
}
