#[test]
fn packwise_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/packwise_error_pass.rs");
}
