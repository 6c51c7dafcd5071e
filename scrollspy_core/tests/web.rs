// Browser-side checks for the JS-facing API. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use scrollspy_core::WasmScrollSpy;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"[
    {"id":"hero","top_offset":0,"height":800},
    {"id":"about","top_offset":800,"height":600},
    {"id":"skills","top_offset":1400,"height":900},
    {"id":"contact","top_offset":2300,"height":700}
]"#;

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let err = WasmScrollSpy::new(r#"{"sections":["hero","hero"]}"#).err().unwrap();
    assert!(err.as_string().unwrap().contains("duplicate section id"));
}

#[wasm_bindgen_test]
fn malformed_regions_are_rejected() {
    let mut spy = WasmScrollSpy::new("{}").unwrap();
    assert!(spy.notify_scroll());
    assert!(spy.run_frame(0.0, "[{\"id\":").is_err());

    // The failed frame still clears the pending flag.
    let requested = (0..100).filter(|_| spy.notify_scroll()).count();
    assert_eq!(requested, 1);
    spy.run_frame(900.0, PAGE).unwrap();
    assert_eq!(spy.active_section().as_deref(), Some("about"));
}

#[wasm_bindgen_test]
fn throwing_callback_keeps_outcome() {
    let callback = js_sys::Function::new_with_args("id", "throw new Error('render failed: ' + id)");
    let mut spy = WasmScrollSpy::new("{}").unwrap();
    spy.set_on_change(callback);

    assert!(spy.notify_scroll());
    let outcome = spy.run_frame(900.0, PAGE).unwrap();
    assert!(outcome.contains(r#""active_changed":"about""#));
    assert!(outcome.contains(r#""scroll_top_changed":true"#));
    assert!(spy.scroll_to_top_visible());
    assert!(spy.notify_scroll());
}

#[wasm_bindgen_test]
fn change_callback_fires_once_per_change() {
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&seen);
    let callback = Closure::wrap(Box::new(move |id: String| {
        sink.borrow_mut().push(id);
    }) as Box<dyn FnMut(String)>);

    let mut spy = WasmScrollSpy::new("{}").unwrap();
    spy.set_on_change(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());

    for scroll_y in [750.0, 900.0, 1500.0, 1500.0] {
        if spy.notify_scroll() {
            spy.run_frame(scroll_y, PAGE).unwrap();
        }
    }

    assert_eq!(*seen.borrow(), vec!["about".to_string(), "skills".to_string()]);
}

#[wasm_bindgen_test]
fn scroll_target_closes_menu() {
    let mut spy = WasmScrollSpy::new("{}").unwrap();
    assert!(spy.toggle_menu());
    assert_eq!(spy.scroll_target("skills", PAGE).unwrap(), Some(1400.0));
    assert!(!spy.is_menu_open());
    assert_eq!(spy.scroll_target("blog", PAGE).unwrap(), None);
}
