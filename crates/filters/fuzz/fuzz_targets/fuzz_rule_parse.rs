#![no_main]

use filters::parse_rule;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|line: &str| {
    if let Ok(rule) = parse_rule(line) {
        let filter = rule.filter();
        let _ = filter.to_string();
        let _ = filter.matches(line);
        let _ = filter.matches(filter.text());
    }
});
