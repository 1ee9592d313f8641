#![no_main]

use libfuzzer_sys::fuzz_target;

use benchrun_core::Selection;

fuzz_target!(|data: (&str, &str)| {
    let (pattern, name) = data;
    if let Ok(selection) = Selection::parse([pattern]) {
        let _ = selection.matches(name);
    }
    assert!(Selection::all().matches(name));
});
