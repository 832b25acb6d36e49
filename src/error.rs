use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Expected a finite number, got: {value}"))]
    InvalidInput { value: f64 },

    #[snafu(display("Expected fixed width to be a non-negative integer, got: {width}"))]
    InvalidOption { width: i64 },
}
