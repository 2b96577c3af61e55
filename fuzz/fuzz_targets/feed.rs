#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut session = rpn::Session::new();
        for line in s.lines() {
            let _ = session.feed(line);
        }
    }
});
