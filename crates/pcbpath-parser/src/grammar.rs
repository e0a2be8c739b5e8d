//! Recursive-descent parser for the SVG 1.1 path mini-language.

use crate::command::{
    ArcSegment, Command, CommandKind, Coord, CubicSegment, QuadraticSegment, SmoothCubicSegment,
};
use crate::error::{ParseError, ParseErrorKind};

/// Parser for path `d` strings.
///
/// Holds no state between calls; build one per session and hand it to
/// whatever constructs paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathGrammar;

impl PathGrammar {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole path.
    ///
    /// An empty (or all-whitespace) string is a valid path with no commands.
    /// Anything else must start with `M` or `m`.
    pub fn parse(&self, input: &str) -> Result<Vec<Command>, ParseError> {
        let mut scanner = Scanner::new(input);
        let mut commands = Vec::new();

        scanner.skip_wsp();
        while let Some(letter) = scanner.peek() {
            if commands.is_empty() && !matches!(letter, b'M' | b'm') {
                return Err(scanner.error(ParseErrorKind::MissingMoveTo(char::from(letter))));
            }
            commands.push(scanner.command()?);
            scanner.skip_wsp();
        }
        tracing::trace!(commands = commands.len(), "parsed path");
        Ok(commands)
    }
}

struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

fn is_wsp(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.input, self.pos)
    }

    /// Char at the cursor, for error messages. Handles non-ASCII input.
    fn current_char(&self) -> char {
        self.input
            .get(self.pos..)
            .and_then(|s| s.chars().next())
            .unwrap_or('\0')
    }

    fn skip_wsp(&mut self) {
        while self.peek().is_some_and(is_wsp) {
            self.pos += 1;
        }
    }

    fn skip_wsp_comma(&mut self) {
        self.skip_wsp();
        if self.peek() == Some(b',') {
            self.pos += 1;
            self.skip_wsp();
        }
    }

    fn at_number(&self) -> bool {
        self.peek()
            .is_some_and(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.'))
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `sign? (digits ('.' digits?)? | '.' digits) exponent?`
    fn number(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = self.eat_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.eat_digits();
        }
        if digits == 0 {
            self.pos = start;
            return Err(self.error(ParseErrorKind::ExpectedNumber));
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            // "2e" followed by something else is a number and a stray 'e'.
            if self.eat_digits() == 0 {
                self.pos = mark;
            }
        }
        match self.input[start..self.pos].parse::<f64>() {
            Ok(v) => Ok(v),
            Err(_) => {
                self.pos = start;
                Err(self.error(ParseErrorKind::ExpectedNumber))
            }
        }
    }

    fn flag(&mut self) -> Result<bool, ParseError> {
        let v = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => return Err(self.error(ParseErrorKind::ExpectedFlag)),
        };
        self.pos += 1;
        Ok(v)
    }

    fn arg(&mut self) -> Result<f64, ParseError> {
        let v = self.number()?;
        self.skip_wsp_comma();
        Ok(v)
    }

    /// Arc radii take no minus sign.
    fn radius(&mut self) -> Result<f64, ParseError> {
        if self.peek() == Some(b'-') {
            return Err(self.error(ParseErrorKind::NegativeRadius));
        }
        self.arg()
    }

    fn coord(&mut self) -> Result<Coord, ParseError> {
        Ok([self.arg()?, self.arg()?])
    }

    fn arc(&mut self) -> Result<ArcSegment, ParseError> {
        let rx = self.radius()?;
        let ry = self.radius()?;
        let x_axis_rotation = self.arg()?;
        let large_arc = self.flag()?;
        self.skip_wsp_comma();
        let sweep = self.flag()?;
        self.skip_wsp_comma();
        let to = self.coord()?;
        Ok(ArcSegment {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            to,
        })
    }

    /// One argument group, then as many more as follow without a new letter.
    fn groups<T>(
        &mut self,
        mut read: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut out = vec![read(self)?];
        while self.at_number() {
            out.push(read(self)?);
        }
        Ok(out)
    }

    fn command(&mut self) -> Result<Command, ParseError> {
        let letter = self.peek().unwrap_or(b'\0');
        let absolute = letter.is_ascii_uppercase();
        let kind = match letter.to_ascii_lowercase() {
            b'm' | b'l' | b'h' | b'v' | b'c' | b's' | b'q' | b't' | b'a' | b'z' => {
                self.pos += 1;
                self.skip_wsp();
                match letter.to_ascii_lowercase() {
                    b'm' => CommandKind::MoveTo(self.groups(Self::coord)?),
                    b'l' => CommandKind::LineTo(self.groups(Self::coord)?),
                    b'h' => CommandKind::HorizontalLineTo(self.groups(Self::arg)?),
                    b'v' => CommandKind::VerticalLineTo(self.groups(Self::arg)?),
                    b'c' => CommandKind::CurveTo(self.groups(|s| {
                        Ok(CubicSegment {
                            ctrl1: s.coord()?,
                            ctrl2: s.coord()?,
                            to: s.coord()?,
                        })
                    })?),
                    b's' => CommandKind::SmoothCurveTo(self.groups(|s| {
                        Ok(SmoothCubicSegment {
                            ctrl2: s.coord()?,
                            to: s.coord()?,
                        })
                    })?),
                    b'q' => CommandKind::QuadraticCurveTo(self.groups(|s| {
                        Ok(QuadraticSegment {
                            ctrl: s.coord()?,
                            to: s.coord()?,
                        })
                    })?),
                    b't' => CommandKind::SmoothQuadraticCurveTo(self.groups(Self::coord)?),
                    b'a' => CommandKind::ArcTo(self.groups(Self::arc)?),
                    _ => CommandKind::ClosePath,
                }
            }
            _ if letter.is_ascii_alphabetic() => {
                return Err(self.error(ParseErrorKind::UnknownCommand(char::from(letter))));
            }
            _ => {
                return Err(self.error(ParseErrorKind::UnexpectedCharacter(self.current_char())));
            }
        };
        Ok(Command::new(absolute, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<Command> {
        PathGrammar::new().parse(s).unwrap()
    }

    #[test]
    fn number_forms() {
        let cmds = parse("M1.5e2-.5 +3. 4E-1");
        assert_eq!(
            cmds[0].kind,
            CommandKind::MoveTo(vec![[150.0, -0.5], [3.0, 0.4]])
        );
    }

    #[test]
    fn dot_starts_a_new_number() {
        let cmds = parse("M.5.5");
        assert_eq!(cmds[0].kind, CommandKind::MoveTo(vec![[0.5, 0.5]]));
    }

    #[test]
    fn compact_arc_flags() {
        let cmds = parse("m0 0a10 10 0 0110 10");
        assert_eq!(
            cmds[1].kind,
            CommandKind::ArcTo(vec![ArcSegment {
                rx: 10.0,
                ry: 10.0,
                x_axis_rotation: 0.0,
                large_arc: false,
                sweep: true,
                to: [10.0, 10.0],
            }])
        );
    }

    #[test]
    fn bad_flag_is_reported() {
        let err = PathGrammar::new().parse("m0 0 a10 10 0 2 1 5 5").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedFlag);
        assert_eq!(err.position, 14);
    }

    #[test]
    fn negative_arc_radius_is_rejected() {
        let err = PathGrammar::new().parse("M0 0 A-5 5 0 0 1 10 0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NegativeRadius);
        assert_eq!(err.position, 6);

        let err = PathGrammar::new().parse("M0 0 a5,-5 0 0 1 10 0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NegativeRadius);
        assert_eq!(err.position, 8);

        // A minus on the rotation is fine, and so is an explicit plus.
        assert!(PathGrammar::new().parse("M0 0 a+5 5 -30 0 1 10 0").is_ok());
    }

    #[test]
    fn dangling_exponent_is_not_swallowed() {
        let err = PathGrammar::new().parse("M1 2e").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownCommand('e'));
        assert_eq!(err.position, 4);
    }
}
