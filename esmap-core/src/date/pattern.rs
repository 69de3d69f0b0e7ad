//! Java-style date layout compiler
//!
//! Elasticsearch date formats are written with `DateTimeFormatter` letters
//! (`yyyy-MM-dd'T'HH:mm:ss.SSSXXX`). This module turns such a layout into
//! chrono format items once, so formatting and parsing never re-read the
//! layout string.
//!
//! Supported letters:
//!
//! | letters            | meaning                         |
//! |--------------------|---------------------------------|
//! | `yyyy` `uuuu` `yy` | year, two-digit year            |
//! | `YYYY` `YY`        | ISO week-based year             |
//! | `M` `MM` `MMM` `MMMM` | month, short/long month name |
//! | `d` `dd`           | day of month                    |
//! | `D` `DDD`          | day of year                     |
//! | `w` `ww`           | ISO week of week-based year     |
//! | `e`                | day of week, Monday = 1         |
//! | `E` `EEEE`         | short/long weekday name         |
//! | `H` `HH` `h` `hh`  | hour (24h / 12h)                |
//! | `a`                | AM/PM marker                    |
//! | `m` `mm` `s` `ss`  | minute, second                  |
//! | `.S..`             | fraction of second (3, 6 or 9)  |
//! | `Z` `ZZZZZ` `X` `XX` `XXX` `x` `xx` `xxx` | zone offset |
//! | `'text'` `''`      | quoted literal, single quote    |
//!
//! Two-digit years always resolve into 2000-2099.

use chrono::format::{Fixed, Item, Numeric, Pad};

/// Error raised for a layout the compiler cannot express
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("unterminated quoted literal starting at position {0}")]
    UnterminatedQuote(usize),
    #[error("unsupported pattern letter '{letter}' repeated {count} time(s)")]
    UnsupportedLetter { letter: char, count: usize },
    #[error("fraction of second at position {0} must follow a '.'")]
    DanglingFraction(usize),
}

/// Date/time components a layout carries
///
/// Used at parse time to default the components a layout leaves out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Components {
    pub year: bool,
    /// Year written with two digits (`yy`, `YY`)
    pub two_digit_year: bool,
    pub iso_year: bool,
    pub month: bool,
    pub day: bool,
    pub ordinal: bool,
    pub iso_week: bool,
    pub weekday: bool,
    pub hour: bool,
    pub minute: bool,
    pub offset: bool,
}

impl Components {
    pub fn has_date(&self) -> bool {
        self.year || self.iso_year || self.month || self.day || self.ordinal || self.iso_week
    }

    pub fn has_time(&self) -> bool {
        self.hour || self.minute
    }
}

/// A layout compiled into chrono format items
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    items: Vec<Item<'static>>,
    components: Components,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let chars: Vec<char> = pattern.chars().collect();
        let mut compiler = Compiler::default();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                i = compiler.quoted(&chars, i)?;
                continue;
            }

            if c.is_ascii_alphabetic() {
                let count = chars[i..].iter().take_while(|&&next| next == c).count();
                compiler.letter(c, count, i)?;
                i += count;
                continue;
            }

            compiler.literal.push(c);
            i += 1;
        }

        compiler.flush_literal();

        Ok(Self { source: pattern.to_string(), items: compiler.items, components: compiler.components })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn items(&self) -> &[Item<'static>] {
        &self.items
    }

    pub fn components(&self) -> Components {
        self.components
    }
}

#[derive(Default)]
struct Compiler {
    items: Vec<Item<'static>>,
    literal: String,
    components: Components,
}

impl Compiler {
    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let text = std::mem::take(&mut self.literal);
            self.items.push(Item::OwnedLiteral(text.into_boxed_str()));
        }
    }

    fn push(&mut self, item: Item<'static>) {
        self.flush_literal();
        self.items.push(item);
    }

    /// Consume a quoted section starting at `start`, returning the next index
    fn quoted(&mut self, chars: &[char], start: usize) -> Result<usize, PatternError> {
        // '' outside a quoted section is an escaped quote
        if chars.get(start + 1) == Some(&'\'') {
            self.literal.push('\'');
            return Ok(start + 2);
        }

        let mut i = start + 1;
        loop {
            match chars.get(i) {
                None => return Err(PatternError::UnterminatedQuote(start)),
                Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                    self.literal.push('\'');
                    i += 2;
                }
                Some('\'') => return Ok(i + 1),
                Some(&c) => {
                    self.literal.push(c);
                    i += 1;
                }
            }
        }
    }

    fn letter(&mut self, letter: char, count: usize, position: usize) -> Result<(), PatternError> {
        let unsupported = || PatternError::UnsupportedLetter { letter, count };
        let pad = if count >= 2 { Pad::Zero } else { Pad::None };

        match letter {
            'y' | 'u' => {
                self.components.year = true;
                match count {
                    2 => {
                        self.components.two_digit_year = true;
                        self.push(Item::Numeric(Numeric::YearMod100, Pad::Zero));
                    }
                    _ => self.push(Item::Numeric(Numeric::Year, Pad::Zero)),
                }
            }
            'Y' => {
                self.components.iso_year = true;
                match count {
                    2 => {
                        self.components.two_digit_year = true;
                        self.push(Item::Numeric(Numeric::IsoYearMod100, Pad::Zero));
                    }
                    _ => self.push(Item::Numeric(Numeric::IsoYear, Pad::Zero)),
                }
            }
            'M' => {
                self.components.month = true;
                match count {
                    1 | 2 => self.push(Item::Numeric(Numeric::Month, pad)),
                    3 => self.push(Item::Fixed(Fixed::ShortMonthName)),
                    _ => self.push(Item::Fixed(Fixed::LongMonthName)),
                }
            }
            'd' if count <= 2 => {
                self.components.day = true;
                self.push(Item::Numeric(Numeric::Day, pad));
            }
            'D' if count <= 3 => {
                self.components.ordinal = true;
                let pad = if count == 3 { Pad::Zero } else { Pad::None };
                self.push(Item::Numeric(Numeric::Ordinal, pad));
            }
            'w' if count <= 2 => {
                self.components.iso_week = true;
                self.push(Item::Numeric(Numeric::IsoWeek, pad));
            }
            'e' if count == 1 => {
                self.components.weekday = true;
                self.push(Item::Numeric(Numeric::WeekdayFromMon, Pad::None));
            }
            'E' => {
                self.components.weekday = true;
                match count {
                    1..=3 => self.push(Item::Fixed(Fixed::ShortWeekdayName)),
                    _ => self.push(Item::Fixed(Fixed::LongWeekdayName)),
                }
            }
            'H' if count <= 2 => {
                self.components.hour = true;
                self.push(Item::Numeric(Numeric::Hour, pad));
            }
            'h' if count <= 2 => {
                self.components.hour = true;
                self.push(Item::Numeric(Numeric::Hour12, pad));
            }
            'a' if count == 1 => self.push(Item::Fixed(Fixed::UpperAmPm)),
            'm' if count <= 2 => {
                self.components.minute = true;
                self.push(Item::Numeric(Numeric::Minute, pad));
            }
            's' if count <= 2 => self.push(Item::Numeric(Numeric::Second, pad)),
            'S' => {
                // chrono renders fractions together with their leading dot
                if !self.literal.ends_with('.') {
                    return Err(PatternError::DanglingFraction(position));
                }
                self.literal.pop();
                let fixed = match count {
                    3 => Fixed::Nanosecond3,
                    6 => Fixed::Nanosecond6,
                    9 => Fixed::Nanosecond9,
                    _ => Fixed::Nanosecond,
                };
                self.push(Item::Fixed(fixed));
            }
            'Z' => {
                self.components.offset = true;
                match count {
                    1..=3 => self.push(Item::Fixed(Fixed::TimezoneOffset)),
                    5 => self.push(Item::Fixed(Fixed::TimezoneOffsetColonZ)),
                    _ => return Err(unsupported()),
                }
            }
            'X' => {
                self.components.offset = true;
                match count {
                    1 | 2 => self.push(Item::Fixed(Fixed::TimezoneOffsetZ)),
                    3 => self.push(Item::Fixed(Fixed::TimezoneOffsetColonZ)),
                    _ => return Err(unsupported()),
                }
            }
            'x' => {
                self.components.offset = true;
                match count {
                    1 | 2 => self.push(Item::Fixed(Fixed::TimezoneOffset)),
                    3 => self.push(Item::Fixed(Fixed::TimezoneOffsetColon)),
                    _ => return Err(unsupported()),
                }
            }
            _ => return Err(unsupported()),
        }

        Ok(())
    }
}
