use crate::Colors;

#[test]
fn off_is_the_default_and_writes_nothing() {
    let c = Colors::default();
    assert!(!c.is_enabled());
    assert_eq!(format!("{}S1{}", c.green, c.reset), "S1");
}

#[test]
fn new_follows_the_flag() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert_eq!(Colors::new(true).red, "\x1b[31m");
}
