#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub(crate) message: String,
}
