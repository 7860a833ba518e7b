use super::*;

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(default_directive(0, false), "warn");
    assert_eq!(default_directive(1, false), "info");
    assert_eq!(default_directive(2, false), "debug");
    assert_eq!(default_directive(7, false), "debug");
}

#[test]
fn quiet_overrides_verbose() {
    assert_eq!(default_directive(0, true), "error");
    assert_eq!(default_directive(3, true), "error");
}

#[test]
fn init_twice_does_not_panic() {
    init(0, false);
    init(2, false);
}
