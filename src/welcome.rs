use crate::config::VERSION;

pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn message() -> String {
        format!("rview editor -- version {VERSION}")
    }

    /// The welcome line for a text area `columns` wide: centered, clipped
    /// to the width, with the filler `~` kept in the first column when
    /// there is padding to spare.
    pub fn render(columns: usize) -> Vec<u8> {
        let message = Self::message();
        let text = &message.as_bytes()[..message.len().min(columns)];
        let mut padding = (columns - text.len()) / 2;

        let mut line = Vec::with_capacity(columns);
        if padding > 0 {
            line.push(b'~');
            padding -= 1;
        }
        line.extend(std::iter::repeat(b' ').take(padding));
        line.extend_from_slice(text);
        line
    }
}
