use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Message<T> {
    message: String,
    data: T,
}

impl<T> Message<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Message { message: message.into(), data }
    }
}
