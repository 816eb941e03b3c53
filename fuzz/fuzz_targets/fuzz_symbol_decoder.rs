#![no_main]

use libfuzzer_sys::fuzz_target;
use tactical_plotting::{decode, encode, VariantKind};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let kind = VariantKind::ALL[selector as usize % VariantKind::ALL.len()];

    // Erfolgreich dekodierte Symbole müssen sich erneut dekodieren lassen
    if let Ok(symbol) = decode(text, kind) {
        let again = decode(&encode(&symbol), kind).expect("re-decode failed");
        assert_eq!(again.control_points(), symbol.control_points());
    }
});
