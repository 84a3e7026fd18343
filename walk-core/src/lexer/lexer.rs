use super::error::{LexicalError, LexicalErrorType};
use super::token::{str_to_keyword, Token, TokenKind};
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);

/// Single pass scanner over `(byte offset, char)` pairs.
///
/// Lexing never fails: malformed input becomes a [`TokenKind::Invalid`] token
/// whose lexeme is the diagnostic, and the parser decides when to report it.
/// The token stream always ends with exactly one [`TokenKind::Eof`].
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,

	finished: bool,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
		let mut lexer = Self {
			position: 0,
			next_position: 0,
			ch: None,
			next_ch: None,
			input,

			finished: false,
		};

		lexer.next_char();
		lexer.next_char();

		lexer
	}

	pub fn next_token(&mut self) -> Spanned {
		self.skip_blanks();

		match self.ch {
			Some(ch) => match ch {
				'\n' => self.lex_newline(),
				'(' => self.eat_one_char(TokenKind::LParen),
				')' => self.eat_one_char(TokenKind::RParen),
				'{' => self.eat_one_char(TokenKind::LBrace),
				'}' => self.eat_one_char(TokenKind::RBrace),
				'+' => self.eat_one_char(TokenKind::Plus),
				'-' => self.eat_one_char(TokenKind::Minus),
				'*' => self.eat_one_char(TokenKind::Star),
				'/' => self.eat_one_char(TokenKind::Slash),
				'=' => self.eat_one_or_two('=', TokenKind::Assign, TokenKind::EqualEqual),
				'<' => self.eat_one_or_two('=', TokenKind::Less, TokenKind::LessEqual),
				'>' => self.eat_one_or_two('=', TokenKind::Greater, TokenKind::GreaterEqual),
				'!' => {
					if self.next_ch == Some('=') {
						self.eat_two_chars(TokenKind::NotEqual)
					} else {
						let start = self.position;
						self.next_char();

						self.invalid(LexicalErrorType::LoneBang, start)
					}
				},
				'"' => self.lex_string(),
				'a'..='z' | 'A'..='Z' | '_' => self.lex_ident(),
				'0'..='9' => self.lex_number(),
				c => {
					let start = self.position;
					self.next_char();

					self.invalid(LexicalErrorType::UnrecognizedToken { tok: c }, start)
				}
			},
			None => (self.position, Token::eof(), self.position)
		}
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += self.next_ch.map_or(0, |ch| ch.len_utf8() as u32);

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn skip_blanks(&mut self) {
		while matches!(self.ch, Some(' ' | '\t' | '\r' | '\x0B' | '\x0C')) {
			self.next_char();
		}
	}

	fn lex_newline(&mut self) -> Spanned {
		let start = self.position;
		self.next_char();
		let end = self.position;

		// blank lines and indentation between them fold into this token
		while self.ch.is_some_and(|ch| ch.is_ascii_whitespace() || ch == '\x0B') {
			self.next_char();
		}

		(start, Token::new(TokenKind::Newline, "\n"), end)
	}

	fn eat_one_char(&mut self, kind: TokenKind) -> Spanned {
		let start_pos = self.position;
		let lexeme = self.next_char().map(String::from).unwrap_or_default();
		let end_pos = self.position;

		(start_pos, Token::new(kind, lexeme), end_pos)
	}

	fn eat_two_chars(&mut self, kind: TokenKind) -> Spanned {
		let start_pos = self.position;
		let lexeme: String = [self.next_char(), self.next_char()].into_iter().flatten().collect();
		let end_pos = self.position;

		(start_pos, Token::new(kind, lexeme), end_pos)
	}

	fn eat_one_or_two(&mut self, second: char, single: TokenKind, double: TokenKind) -> Spanned {
		if self.next_ch == Some(second) {
			self.eat_two_chars(double)
		} else {
			self.eat_one_char(single)
		}
	}

	fn invalid(&self, error: LexicalErrorType, start: u32) -> Spanned {
		let end = self.position;
		let error = LexicalError {
			error,
			location: SrcSpan::from(start, end),
		};

		(start, Token::invalid(&error), end)
	}

	fn lex_ident(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut ident = String::new();

		while let Some(ch) = self.ch.filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_') {
			ident.push(ch);
			self.next_char();
		}

		let end_pos = self.position;

		let kind = str_to_keyword(&ident).unwrap_or(TokenKind::Ident);

		(start_pos, Token::new(kind, ident), end_pos)
	}

	fn lex_number(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut value = String::new();

		self.take_digits(&mut value);

		// `1.` leaves the period for the next token
		if self.ch == Some('.') && self.next_ch.is_some_and(|ch| ch.is_ascii_digit()) {
			value.push('.');
			self.next_char();
			self.take_digits(&mut value);
		}

		let end_pos = self.position;

		(start_pos, Token::new(TokenKind::Number, value), end_pos)
	}

	fn take_digits(&mut self, value: &mut String) {
		while let Some(ch) = self.ch.filter(char::is_ascii_digit) {
			value.push(ch);
			self.next_char();
		}
	}

	fn lex_string(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut value = String::new();

		self.next_char(); // skip opening quote

		loop {
			match self.ch {
				Some('"') => break,
				Some('\n') | None => {
					return self.invalid(LexicalErrorType::UnterminatedString, start_pos);
				},
				Some(ch) => {
					value.push(ch);
					self.next_char();
				}
			}
		}

		self.next_char(); // skip closing quote

		let end_pos = self.position;

		(start_pos, Token::new(TokenKind::String, value), end_pos)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = Spanned;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let token = self.next_token();

		if token.1.is(TokenKind::Eof) {
			self.finished = true;
		}

		Some(token)
	}
}

pub fn tokenize(src: &str) -> Vec<Spanned> {
	Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c))).collect()
}
