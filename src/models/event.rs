/// A single line of a log source, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub number: usize,
    pub text: String,
}

impl LogLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        LogLine {
            number,
            text: text.into(),
        }
    }
}
