//! Generators for scalar values and bounded strings.

use crate::{data::*, error::*, gen::*};
use rand::distributions::uniform::SampleUniform;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Debug;

/// Uniform integer generator over the closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntGen<T> {
    min: T,
    max: T,
}

impl<T> IntGen<T>
where
    T: PartialOrd + Copy + Debug,
{
    /// Generate integers in `[min, max]`.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(GencheckError::inverted("integer", min, max));
        }
        Ok(IntGen { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Whether `value` lies within the configured bounds.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl<T> Generator for IntGen<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    type Value = T;

    fn generate(&self, source: &mut Source) -> T {
        source.gen_range(self.min..=self.max)
    }
}

macro_rules! int_gen_defaults {
    ($($t:ty),*) => {
        $(
            impl Default for IntGen<$t> {
                /// Integers in `[0, 100]`.
                fn default() -> Self {
                    IntGen { min: 0, max: 100 }
                }
            }

            impl IntGen<$t> {
                /// Non-negative integers up to the type's maximum.
                pub fn natural() -> Self {
                    IntGen { min: 0, max: <$t>::MAX }
                }
            }
        )*
    };
}

macro_rules! int_gen_symmetric {
    ($($t:ty),*) => {
        $(
            impl IntGen<$t> {
                /// Integers in `[-100, 100]`.
                pub fn symmetric() -> Self {
                    IntGen { min: -100, max: 100 }
                }
            }
        )*
    };
}

int_gen_defaults!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
int_gen_symmetric!(i8, i16, i32, i64, isize);

/// Uniform character generator over `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharGen {
    min: char,
    max: char,
}

impl CharGen {
    /// Generate characters in `[min, max]`.
    pub fn new(min: char, max: char) -> Result<Self> {
        if min > max {
            return Err(GencheckError::inverted("character", min, max));
        }
        Ok(CharGen { min, max })
    }

    pub fn min(&self) -> char {
        self.min
    }

    pub fn max(&self) -> char {
        self.max
    }
}

impl Default for CharGen {
    /// Lowercase ASCII letters.
    fn default() -> Self {
        CharGen { min: 'a', max: 'z' }
    }
}

impl Generator for CharGen {
    type Value = char;

    fn generate(&self, source: &mut Source) -> char {
        source.gen_range(self.min..=self.max)
    }
}

/// Uniform boolean generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolGen;

impl Generator for BoolGen {
    type Value = bool;

    fn generate(&self, source: &mut Source) -> bool {
        source.gen()
    }
}

/// Longest run of consecutive spaces a generated string may contain.
pub const MAX_SPACE_RUN: usize = 5;

/// Bounded-length string generator.
///
/// A length is drawn from `[min_len, max_len]`, then up to `max_spaces`
/// spaces (never the whole string) are mixed with characters drawn from the
/// character range and the two are shuffled together. Runs longer than
/// [`MAX_SPACE_RUN`] are cut back, the surplus positions refilled from the
/// character range, so the length bound still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringGen {
    min_len: usize,
    max_len: usize,
    chars: CharGen,
    max_spaces: usize,
}

impl StringGen {
    /// Strings of `[min_len, max_len]` characters drawn from `[min_char, max_char]`.
    pub fn new(min_len: usize, max_len: usize, min_char: char, max_char: char) -> Result<Self> {
        if min_len > max_len {
            return Err(GencheckError::inverted("string length", min_len, max_len));
        }
        let chars = CharGen::new(min_char, max_char)?;
        if min_char == ' ' && max_char == ' ' && max_len > MAX_SPACE_RUN {
            return Err(GencheckError::InvalidConfiguration {
                message: format!(
                    "a space-only character range cannot fill strings longer than {MAX_SPACE_RUN}"
                ),
            });
        }
        Ok(StringGen {
            min_len,
            max_len,
            chars,
            max_spaces: 0,
        })
    }

    /// Allow up to `max_spaces` inserted spaces per string.
    pub fn with_max_spaces(mut self, max_spaces: usize) -> Self {
        self.max_spaces = max_spaces;
        self
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn chars(&self) -> CharGen {
        self.chars
    }

    pub fn max_spaces(&self) -> usize {
        self.max_spaces
    }

    fn break_space_runs(&self, chars: &mut [char], source: &mut Source) {
        let mut run = 0;
        for c in chars.iter_mut() {
            if *c != ' ' {
                run = 0;
                continue;
            }
            run += 1;
            if run > MAX_SPACE_RUN {
                *c = self.non_space(source);
                run = 0;
            }
        }
    }

    fn non_space(&self, source: &mut Source) -> char {
        // Terminates: `new` rejects space-only ranges whenever a run can exceed the cap.
        loop {
            let c = self.chars.generate(source);
            if c != ' ' {
                return c;
            }
        }
    }
}

impl Default for StringGen {
    /// 5 to 15 lowercase ASCII letters, no spaces.
    fn default() -> Self {
        StringGen {
            min_len: 5,
            max_len: 15,
            chars: CharGen::default(),
            max_spaces: 0,
        }
    }
}

impl Generator for StringGen {
    type Value = String;

    fn generate(&self, source: &mut Source) -> String {
        let len = source.gen_range(self.min_len..=self.max_len);
        let spaces = match len {
            0 => 0,
            _ => source.gen_range(0..=self.max_spaces.min(len - 1)),
        };

        let mut chars: Vec<char> = (0..len - spaces)
            .map(|_| self.chars.generate(source))
            .collect();
        chars.extend(std::iter::repeat(' ').take(spaces));
        chars.shuffle(source);
        self.break_space_runs(&mut chars, source);

        chars.into_iter().collect()
    }
}

/// Length of the longest run of consecutive spaces in `s`.
pub fn longest_space_run(s: &str) -> usize {
    s.split(|c: char| c != ' ').map(str::len).max().unwrap_or(0)
}
