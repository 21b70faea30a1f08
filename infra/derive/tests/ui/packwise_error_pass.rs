use packwise_derive::packwise_error;
use std::borrow::Cow;

#[packwise_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u64, DemoError> {
    raw.parse::<u64>().context("parsing order quantity")
}

fn main() {
    let err = parse("abc").unwrap_err();
    assert!(err.to_string().contains("(parsing order quantity)"));

    let internal: DemoError = "catalog missing".into();
    assert!(matches!(internal, DemoError::Internal { .. }));

    let wrapped: Result<(), DemoError> = Err(DemoError::from("boom"));
    let wrapped = wrapped.context("solving");
    assert_eq!(wrapped.unwrap_err().to_string(), "Internal error (solving): boom");
}
