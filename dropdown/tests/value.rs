use dropdown::OptionValue;

#[test]
fn test_equality_is_strict() {
    assert_eq!(OptionValue::from("1"), OptionValue::from("1"));
    assert_eq!(OptionValue::from(1), OptionValue::from(1.0));
    assert_ne!(OptionValue::from("1"), OptionValue::from(1));
    assert_ne!(OptionValue::from(f64::NAN), OptionValue::from(f64::NAN));
}

#[test]
fn test_display() {
    assert_eq!(OptionValue::from("abc").to_string(), "abc");
    assert_eq!(OptionValue::from(42).to_string(), "42");
    assert_eq!(OptionValue::from(2.5).to_string(), "2.5");
}

#[test]
fn test_accessors() {
    assert_eq!(OptionValue::from("x").as_str(), Some("x"));
    assert_eq!(OptionValue::from("x").as_num(), None);
    assert_eq!(OptionValue::from(7u8).as_num(), Some(7.0));
    assert_eq!(OptionValue::from(7u8).as_str(), None);
}
