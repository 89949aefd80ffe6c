//! `JsonDecoder`: strict JSON text reader producing [`JsonValue`].
//!
//! Follows RFC 8259 with no extensions: no comments, no trailing commas, no
//! leading `+` or leading zeros on numbers, no unescaped control characters
//! in strings, no lone surrogate escapes. Anything after the root value other
//! than whitespace is rejected.

use crate::error::JsonError;
use crate::value::{JsonNumber, JsonObject, JsonValue};

/// Default nesting limit, matching `serde_json`'s recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum number of nested arrays/objects. Deeper input fails with
    /// [`JsonError::DepthLimit`].
    pub max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Stateless decoder; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    options: DecoderOptions,
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Parse a complete JSON text.
    ///
    /// # Example
    ///
    /// ```
    /// use json_text::{JsonDecoder, JsonError};
    ///
    /// let decoder = JsonDecoder::new();
    /// let value = decoder.decode(br#"{"a":[1,true,null]}"#).unwrap();
    /// assert_eq!(value.to_string(), r#"{"a":[1,true,null]}"#);
    ///
    /// assert_eq!(decoder.decode(b"{} x"), Err(JsonError::TrailingData(3)));
    /// ```
    pub fn decode(&self, input: &[u8]) -> Result<JsonValue, JsonError> {
        let mut reader = Reader {
            data: input,
            x: 0,
            depth: 0,
            max_depth: self.options.max_depth,
        };
        let value = reader.read_any()?;
        reader.skip_whitespace();
        if reader.x < input.len() {
            return Err(JsonError::TrailingData(reader.x));
        }
        Ok(value)
    }
}

/// Parse a complete JSON text with default options.
pub fn from_slice(input: &[u8]) -> Result<JsonValue, JsonError> {
    JsonDecoder::new().decode(input)
}

/// Scan one number token starting at `start`.
///
/// Returns the end offset and whether the token is a plain integer (no
/// fraction, no exponent).
pub(crate) fn scan_number(data: &[u8], start: usize) -> Result<(usize, bool), JsonError> {
    let mut x = start;
    if data.get(x) == Some(&b'-') {
        x += 1;
    }
    match data.get(x) {
        Some(b'0') => x += 1,
        Some(b'1'..=b'9') => x = skip_digits(data, x + 1),
        _ => return Err(JsonError::InvalidNumber(start)),
    }
    let mut integer = true;
    if data.get(x) == Some(&b'.') {
        integer = false;
        let digits = x + 1;
        x = skip_digits(data, digits);
        if x == digits {
            return Err(JsonError::InvalidNumber(start));
        }
    }
    if matches!(data.get(x), Some(b'e' | b'E')) {
        integer = false;
        x += 1;
        if matches!(data.get(x), Some(b'+' | b'-')) {
            x += 1;
        }
        let digits = x;
        x = skip_digits(data, digits);
        if x == digits {
            return Err(JsonError::InvalidNumber(start));
        }
    }
    // "01" would otherwise split into two tokens.
    if data.get(x).is_some_and(u8::is_ascii_digit) {
        return Err(JsonError::InvalidNumber(start));
    }
    Ok((x, integer))
}

fn skip_digits(data: &[u8], mut x: usize) -> usize {
    while data.get(x).is_some_and(u8::is_ascii_digit) {
        x += 1;
    }
    x
}

struct Reader<'a> {
    data: &'a [u8],
    x: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Result<u8, JsonError> {
        self.data.get(self.x).copied().ok_or(JsonError::UnexpectedEnd)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.data.get(self.x) {
            self.x += 1;
        }
    }

    fn read_any(&mut self) -> Result<JsonValue, JsonError> {
        self.skip_whitespace();
        match self.peek()? {
            b'"' => Ok(JsonValue::String(self.read_str()?)),
            b'{' => self.read_obj(),
            b'[' => self.read_arr(),
            b't' => self.read_literal(b"true", JsonValue::Bool(true)),
            b'f' => self.read_literal(b"false", JsonValue::Bool(false)),
            b'n' => self.read_literal(b"null", JsonValue::Null),
            b'-' | b'0'..=b'9' => self.read_num(),
            _ => Err(JsonError::Invalid(self.x)),
        }
    }

    fn read_literal(&mut self, literal: &[u8], value: JsonValue) -> Result<JsonValue, JsonError> {
        let rest = &self.data[self.x..];
        if rest.starts_with(literal) {
            self.x += literal.len();
            Ok(value)
        } else if literal.starts_with(rest) {
            Err(JsonError::UnexpectedEnd)
        } else {
            Err(JsonError::Invalid(self.x))
        }
    }

    fn read_num(&mut self) -> Result<JsonValue, JsonError> {
        let start = self.x;
        let (end, _) = scan_number(self.data, start)?;
        self.x = end;
        let text = self.utf8(start, end)?;
        Ok(JsonValue::Number(JsonNumber::from_token(text)))
    }

    fn utf8(&self, from: usize, to: usize) -> Result<&'a str, JsonError> {
        std::str::from_utf8(&self.data[from..to])
            .map_err(|err| JsonError::InvalidUtf8(from + err.valid_up_to()))
    }

    fn read_str(&mut self) -> Result<String, JsonError> {
        self.x += 1; // opening quote
        let mut out = String::new();
        let mut run = self.x;
        loop {
            match self.peek()? {
                b'"' => {
                    out.push_str(self.utf8(run, self.x)?);
                    self.x += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(self.utf8(run, self.x)?);
                    self.read_escape(&mut out)?;
                    run = self.x;
                }
                0x00..=0x1f => return Err(JsonError::ControlCharacter(self.x)),
                _ => self.x += 1,
            }
        }
    }

    fn read_escape(&mut self, out: &mut String) -> Result<(), JsonError> {
        let at = self.x;
        let marker = *self.data.get(at + 1).ok_or(JsonError::UnexpectedEnd)?;
        self.x = at + 2;
        let ch = match marker {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{08}',
            b'f' => '\u{0c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => self.read_unicode_escape(at)?,
            _ => return Err(JsonError::InvalidEscape(at)),
        };
        out.push(ch);
        Ok(())
    }

    fn read_unicode_escape(&mut self, at: usize) -> Result<char, JsonError> {
        let high = self.read_hex4(at)?;
        let code = match high {
            0xD800..=0xDBFF => {
                if self.data.get(self.x) != Some(&b'\\') || self.data.get(self.x + 1) != Some(&b'u')
                {
                    return Err(JsonError::InvalidEscape(at));
                }
                self.x += 2;
                let low = self.read_hex4(at)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(JsonError::InvalidEscape(at));
                }
                0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(JsonError::InvalidEscape(at)),
            _ => u32::from(high),
        };
        char::from_u32(code).ok_or(JsonError::InvalidEscape(at))
    }

    fn read_hex4(&mut self, at: usize) -> Result<u16, JsonError> {
        let end = self.x + 4;
        let digits = self.data.get(self.x..end).ok_or(JsonError::UnexpectedEnd)?;
        let mut code: u16 = 0;
        for &b in digits {
            let nibble = char::from(b).to_digit(16).ok_or(JsonError::InvalidEscape(at))?;
            code = (code << 4) | nibble as u16;
        }
        self.x = end;
        Ok(code)
    }

    fn enter(&mut self) -> Result<(), JsonError> {
        if self.depth >= self.max_depth {
            return Err(JsonError::DepthLimit(self.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn read_arr(&mut self) -> Result<JsonValue, JsonError> {
        self.enter()?;
        self.x += 1;
        let mut arr = Vec::new();
        self.skip_whitespace();
        if self.peek()? == b']' {
            self.x += 1;
        } else {
            loop {
                arr.push(self.read_any()?);
                self.skip_whitespace();
                match self.peek()? {
                    b',' => self.x += 1,
                    b']' => {
                        self.x += 1;
                        break;
                    }
                    _ => return Err(JsonError::Invalid(self.x)),
                }
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Array(arr))
    }

    fn read_obj(&mut self) -> Result<JsonValue, JsonError> {
        self.enter()?;
        self.x += 1;
        let mut obj = JsonObject::new();
        self.skip_whitespace();
        if self.peek()? == b'}' {
            self.x += 1;
        } else {
            loop {
                self.skip_whitespace();
                if self.peek()? != b'"' {
                    return Err(JsonError::Invalid(self.x));
                }
                let key = self.read_str()?;
                self.skip_whitespace();
                if self.peek()? != b':' {
                    return Err(JsonError::Invalid(self.x));
                }
                self.x += 1;
                let value = self.read_any()?;
                // Duplicate keys: last write wins, first position is kept.
                obj.insert(key, value);
                self.skip_whitespace();
                match self.peek()? {
                    b',' => self.x += 1,
                    b'}' => {
                        self.x += 1;
                        break;
                    }
                    _ => return Err(JsonError::Invalid(self.x)),
                }
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Object(obj))
    }
}
