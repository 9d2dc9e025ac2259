#![no_main]
use libfuzzer_sys::fuzz_target;
use unstringify::calldata::format_calldata;
use unstringify::{Groth16Calldata, PlonkCalldata, parse_calldata};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must never panic, only return errors
        let _ = PlonkCalldata::parse(s);

        if let Ok(args) = parse_calldata(s) {
            let reparsed = parse_calldata(&format_calldata(&args)).expect("formatted calldata must parse");
            assert_eq!(args, reparsed);

            if let Ok(cd) = Groth16Calldata::from_args(args.clone()) {
                assert_eq!(cd.to_args(), args);
            }
        }
    }
});
