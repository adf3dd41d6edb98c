//! Just enough of Terraform's native syntax to find `required_version`.
//!
//! The lexer understands comments, quoted strings (escapes and template
//! sequences), heredocs, and bracket nesting. The parser walks top-level
//! blocks, descends only into label-less `terraform` blocks, and reads their
//! depth-1 `required_version` attribute. Everything else is skipped.

use anyhow::bail;

/// One `required_version` found in a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredVersionAttr {
    /// Decoded string value.
    pub raw: String,
    /// 1-based position of the enclosing `terraform` keyword.
    pub line: u32,
    pub col: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Tok {
    Ident(String),
    Str { value: String, templated: bool },
    Eq,
    Open,
    Close,
    Newline,
    Other,
}

#[derive(Clone, Debug)]
struct Token {
    tok: Tok,
    offset: usize,
}

/// 1-based line and column (in chars) for a byte offset.
pub(crate) fn line_col(source: &str, offset: usize) -> (u32, u32) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line as u32, col as u32)
}

pub fn scan_required_versions(text: &str) -> anyhow::Result<Vec<RequiredVersionAttr>> {
    let tokens = Lexer::new(text).run()?;
    let mut parser = Parser {
        src: text,
        tokens: &tokens,
        pos: 0,
    };
    parser.top_level()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn push(&mut self, tok: Tok, offset: usize) {
        self.tokens.push(Token { tok, offset });
    }

    fn line_of(&self, offset: usize) -> u32 {
        line_col(self.src, offset).0
    }

    fn run(mut self) -> anyhow::Result<Vec<Token>> {
        while let Some(c) = self.peek() {
            let start = self.pos;
            match c {
                '\n' => {
                    self.bump();
                    self.push(Tok::Newline, start);
                }
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '#' => self.skip_line_comment(),
                '/' if self.rest().starts_with("//") => self.skip_line_comment(),
                '/' if self.rest().starts_with("/*") => self.skip_block_comment(),
                '"' => {
                    self.bump();
                    let (value, templated) = self.string_body(start)?;
                    self.push(Tok::Str { value, templated }, start);
                }
                '<' if self.heredoc_header().is_some() => self.heredoc(start)?,
                '=' => {
                    self.bump();
                    if matches!(self.peek(), Some('=') | Some('>')) {
                        self.bump();
                        self.push(Tok::Other, start);
                    } else {
                        self.push(Tok::Eq, start);
                    }
                }
                '{' | '[' | '(' => {
                    self.bump();
                    self.push(Tok::Open, start);
                }
                '}' | ']' | ')' => {
                    self.bump();
                    self.push(Tok::Close, start);
                }
                c if c.is_alphabetic() || c == '_' => {
                    let len = self
                        .rest()
                        .find(|ch: char| !(ch.is_alphanumeric() || ch == '_' || ch == '-'))
                        .unwrap_or(self.rest().len());
                    let ident = self.rest()[..len].to_string();
                    self.pos += len;
                    self.push(Tok::Ident(ident), start);
                }
                _ => {
                    self.bump();
                    self.push(Tok::Other, start);
                }
            }
        }
        Ok(self.tokens)
    }

    fn skip_line_comment(&mut self) {
        self.pos = match self.rest().find('\n') {
            Some(i) => self.pos + i,
            None => self.src.len(),
        };
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        self.pos = match self.rest().find("*/") {
            Some(i) => self.pos + i + 2,
            None => self.src.len(),
        };
    }

    /// Body of a quoted string; the opening quote is already consumed.
    fn string_body(&mut self, start: usize) -> anyhow::Result<(String, bool)> {
        let mut value = String::new();
        let mut templated = false;
        loop {
            let Some(c) = self.bump() else {
                bail!("unterminated string starting at line {}", self.line_of(start));
            };
            match c {
                '"' => return Ok((value, templated)),
                '\n' => bail!("unterminated string starting at line {}", self.line_of(start)),
                '\\' => {
                    let Some(e) = self.bump() else {
                        bail!("unterminated string starting at line {}", self.line_of(start));
                    };
                    match e {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        'u' => self.unicode_escape(4, 'u', &mut value),
                        'U' => self.unicode_escape(8, 'U', &mut value),
                        other => {
                            value.push('\\');
                            value.push(other);
                        }
                    }
                }
                '$' | '%' => {
                    let open = if c == '$' { "${" } else { "%{" };
                    if self.rest().starts_with(open) {
                        // `$${` and `%%{` are literal.
                        value.push_str(open);
                        self.pos += 2;
                    } else if self.rest().starts_with('{') {
                        templated = true;
                        self.pos += 1;
                        self.skip_template(start)?;
                    } else {
                        value.push(c);
                    }
                }
                other => value.push(other),
            }
        }
    }

    fn unicode_escape(&mut self, digits: usize, marker: char, value: &mut String) {
        let decoded = self
            .rest()
            .get(..digits)
            .filter(|h| h.chars().all(|c| c.is_ascii_hexdigit()))
            .and_then(|h| u32::from_str_radix(h, 16).ok())
            .and_then(char::from_u32);
        match decoded {
            Some(ch) => {
                value.push(ch);
                self.pos += digits;
            }
            None => {
                value.push('\\');
                value.push(marker);
            }
        }
    }

    /// Skip a `${ ... }` or `%{ ... }` sequence; the opening brace is consumed.
    fn skip_template(&mut self, start: usize) -> anyhow::Result<()> {
        let mut depth = 1usize;
        loop {
            let Some(c) = self.bump() else {
                bail!("unterminated template starting at line {}", self.line_of(start));
            };
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                '"' => {
                    self.string_body(start)?;
                }
                _ => {}
            }
        }
    }

    /// `<<MARKER` or `<<-MARKER` followed by end of line.
    fn heredoc_header(&self) -> Option<(bool, String, usize)> {
        let after = self.rest().strip_prefix("<<")?;
        let (indented, after) = match after.strip_prefix('-') {
            Some(a) => (true, a),
            None => (false, after),
        };
        let marker_len = after
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if marker_len == 0 {
            return None;
        }
        let marker = &after[..marker_len];
        let tail = &after[marker_len..];
        let line_break = if tail.starts_with("\r\n") {
            2
        } else if tail.starts_with('\n') {
            1
        } else {
            return None;
        };
        let header_len = self.rest().len() - tail.len() + line_break;
        Some((indented, marker.to_string(), header_len))
    }

    fn heredoc(&mut self, start: usize) -> anyhow::Result<()> {
        let Some((indented, marker, header_len)) = self.heredoc_header() else {
            return Ok(());
        };
        self.pos += header_len;

        let mut lines: Vec<&str> = Vec::new();
        loop {
            if self.pos >= self.src.len() {
                bail!("unterminated heredoc starting at line {}", self.line_of(start));
            }
            let rest = self.rest();
            let (line, advance) = match rest.find('\n') {
                Some(i) => (&rest[..i], i + 1),
                None => (rest, rest.len()),
            };
            self.pos += advance;
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim() == marker {
                break;
            }
            lines.push(line);
        }

        if indented {
            let indent = lines
                .iter()
                .filter(|l| !l.trim().is_empty())
                .map(|l| l.len() - l.trim_start().len())
                .min()
                .unwrap_or(0);
            for line in lines.iter_mut() {
                *line = line.get(indent..).unwrap_or("");
            }
        }

        let value = lines.join("\n");
        let templated = value.contains("${") || value.contains("%{");
        self.push(Tok::Str { value, templated }, start);
        self.push(Tok::Newline, self.pos.saturating_sub(1));
        Ok(())
    }
}

struct Parser<'a> {
    src: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Tok> {
        self.tokens.get(self.pos).map(|t| &t.tok)
    }

    fn peek_at(&self, n: usize) -> Option<&'a Tok> {
        self.tokens.get(self.pos + n).map(|t| &t.tok)
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek(), Some(Tok::Newline)) {
            self.pos += 1;
        }
    }

    fn is_attribute_start(&self) -> bool {
        matches!(self.peek(), Some(Tok::Ident(_))) && matches!(self.peek_at(1), Some(Tok::Eq))
    }

    /// Consume a bracketed group starting at an `Open` token.
    fn skip_balanced(&mut self) {
        let mut depth = 0usize;
        while let Some(tok) = self.peek() {
            self.pos += 1;
            match tok {
                Tok::Open => depth += 1,
                Tok::Close => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Consume an attribute value; stops before the line end or an unmatched closer.
    fn skip_expression(&mut self) -> &'a [Token] {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(tok) = self.peek() {
            match tok {
                Tok::Newline if depth == 0 => break,
                Tok::Close if depth == 0 => break,
                Tok::Close => depth -= 1,
                Tok::Open => depth += 1,
                _ => {}
            }
            self.pos += 1;
        }
        &self.tokens[start..self.pos]
    }

    /// Skip block labels, returning how many there were.
    fn skip_labels(&mut self) -> usize {
        let mut labels = 0;
        while matches!(self.peek(), Some(Tok::Ident(_)) | Some(Tok::Str { .. })) {
            labels += 1;
            self.pos += 1;
        }
        labels
    }

    fn top_level(&mut self) -> anyhow::Result<Vec<RequiredVersionAttr>> {
        let mut out = Vec::new();
        loop {
            self.skip_newlines();
            let Some(tok) = self.peek() else {
                break;
            };
            match tok {
                Tok::Ident(_) if self.is_attribute_start() => {
                    self.pos += 2;
                    self.skip_expression();
                }
                Tok::Ident(name) => {
                    let header = self.tokens[self.pos].offset;
                    let is_terraform = name == "terraform";
                    self.pos += 1;
                    let labels = self.skip_labels();
                    if matches!(self.peek(), Some(Tok::Open)) {
                        if is_terraform && labels == 0 {
                            out.extend(self.terraform_body(header)?);
                        } else {
                            self.skip_balanced();
                        }
                    }
                }
                Tok::Open => self.skip_balanced(),
                _ => self.pos += 1,
            }
        }
        Ok(out)
    }

    fn terraform_body(&mut self, header: usize) -> anyhow::Result<Vec<RequiredVersionAttr>> {
        let (line, col) = line_col(self.src, header);
        let mut out = Vec::new();

        // Opening brace.
        self.pos += 1;
        loop {
            self.skip_newlines();
            let Some(tok) = self.peek() else {
                break;
            };
            match tok {
                Tok::Close => {
                    self.pos += 1;
                    break;
                }
                Tok::Ident(name) if self.is_attribute_start() => {
                    let attr_line = line_col(self.src, self.tokens[self.pos].offset).0;
                    self.pos += 2;
                    let value = self.skip_expression();
                    if name == "required_version" {
                        let raw = decode_string(value).ok_or_else(|| {
                            anyhow::anyhow!(
                                "failed to decode terraform required_version at line {attr_line}: \
                                 expected a string literal"
                            )
                        })?;
                        out.push(RequiredVersionAttr { raw, line, col });
                    }
                }
                Tok::Ident(_) => {
                    self.pos += 1;
                    self.skip_labels();
                    if matches!(self.peek(), Some(Tok::Open)) {
                        self.skip_balanced();
                    }
                }
                Tok::Open => self.skip_balanced(),
                _ => self.pos += 1,
            }
        }
        Ok(out)
    }
}

fn decode_string(value: &[Token]) -> Option<String> {
    match value {
        [
            Token {
                tok: Tok::Str {
                    value,
                    templated: false,
                },
                ..
            },
        ] => Some(value.clone()),
        _ => None,
    }
}
