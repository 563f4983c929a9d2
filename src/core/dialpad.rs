//! # Dial Pad
//!
//! Visibility flag plus a bounded digit buffer. Closing the pad keeps the
//! buffer; only `clear()` and a successful dial empty it.

/// Buffer capacity in characters. Input past this is dropped.
pub const MAX_DIAL_DIGITS: usize = 18;

/// Keypad layout, row-major, three columns.
pub const KEYPAD: [char; 12] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialPad {
    pub is_open: bool,
    buffer: String,
}

impl DialPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Append one character. Returns false if the buffer was full.
    pub fn push(&mut self, c: char) -> bool {
        if self.len() >= MAX_DIAL_DIGITS {
            return false;
        }
        self.buffer.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Take the trimmed number out of the buffer, or `None` if it is blank.
    /// A blank buffer is left untouched.
    pub fn take_number(&mut self) -> Option<String> {
        let number = self.buffer.trim();
        if number.is_empty() {
            return None;
        }
        let number = number.to_string();
        self.buffer.clear();
        Some(number)
    }
}

pub fn is_keypad_char(c: char) -> bool {
    KEYPAD.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_cap() {
        let mut pad = DialPad::new();
        for _ in 0..MAX_DIAL_DIGITS {
            assert!(pad.push('9'));
        }
        assert!(!pad.push('1'));
        assert_eq!(pad.len(), MAX_DIAL_DIGITS);
        assert!(pad.buffer().chars().all(|c| c == '9'));
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut pad = DialPad::new();
        assert_eq!(pad.pop(), None);
        assert!(pad.is_empty());
    }

    #[test]
    fn test_close_keeps_buffer() {
        let mut pad = DialPad::new();
        pad.open();
        pad.push('4');
        pad.close();
        assert!(!pad.is_open);
        assert_eq!(pad.buffer(), "4");
    }

    #[test]
    fn test_take_number_blank() {
        let mut pad = DialPad::new();
        assert_eq!(pad.take_number(), None);
        pad.push(' ');
        assert_eq!(pad.take_number(), None);
        assert_eq!(pad.buffer(), " ");
    }

    #[test]
    fn test_keypad_chars() {
        assert!(is_keypad_char('#'));
        assert!(is_keypad_char('0'));
        assert!(!is_keypad_char('a'));
    }
}
