/// Text written between (never around) adjacent encoded octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter<'a> {
    #[default]
    None,
    Char(char),
    Str(&'a str),
}

impl Delimiter<'_> {
    /// Length in characters. This is the value to hand to the delimited decoders.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Delimiter::None => 0,
            Delimiter::Char(_) => 1,
            Delimiter::Str(s) => s.chars().count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.byte_len() == 0
    }

    pub(crate) fn byte_len(&self) -> usize {
        match self {
            Delimiter::None => 0,
            Delimiter::Char(c) => c.len_utf8(),
            Delimiter::Str(s) => s.len(),
        }
    }

    pub(crate) fn push_to(&self, out: &mut String) {
        match self {
            Delimiter::None => {}
            Delimiter::Char(c) => out.push(*c),
            Delimiter::Str(s) => out.push_str(s),
        }
    }
}

impl From<char> for Delimiter<'_> {
    fn from(c: char) -> Self {
        Delimiter::Char(c)
    }
}

impl<'a> From<&'a str> for Delimiter<'a> {
    fn from(s: &'a str) -> Self {
        Delimiter::Str(s)
    }
}

impl<'a, D: Into<Delimiter<'a>>> From<Option<D>> for Delimiter<'a> {
    fn from(delimiter: Option<D>) -> Self {
        delimiter.map_or(Delimiter::None, Into::into)
    }
}

/// Length of the text produced by encoding `byte_count` octets with a delimiter of
/// length `delimiter_len`: `2n + (n - 1) * d`, and zero for no octets.
#[must_use]
pub const fn encoded_len(byte_count: usize, delimiter_len: usize) -> usize {
    if byte_count == 0 {
        return 0;
    }
    (byte_count << 1) + (byte_count - 1) * delimiter_len
}
