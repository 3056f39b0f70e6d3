//! Typewriter effect as an explicit one-step state machine.
//!
//! `step()` performs exactly one transition and reports the text to show plus
//! how long to wait before the next step. Callers schedule the next step
//! tagged with [`Typewriter::generation`]; `restart()` bumps the generation so
//! any continuation scheduled for the previous text list becomes inert.

use crate::config::TypingTimings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub visible: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    texts: Vec<String>,
    text_index: usize,
    char_index: usize, // in chars, not bytes
    deleting: bool,
    generation: u64,
    timings: TypingTimings,
}

impl Typewriter {
    pub fn new(timings: TypingTimings) -> Self {
        Self {
            texts: Vec::new(),
            text_index: 0,
            char_index: 0,
            deleting: false,
            generation: 0,
            timings,
        }
    }

    /// Replace the text list and start over from its first entry.
    /// Returns the new generation.
    pub fn restart(&mut self, texts: Vec<String>) -> u64 {
        self.texts = texts;
        self.text_index = 0;
        self.char_index = 0;
        self.deleting = false;
        self.generation += 1;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && !self.texts.is_empty()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    /// Advance one tick. `None` when there is nothing to type.
    pub fn step(&mut self) -> Option<Step> {
        let current = self.texts.get(self.text_index)?;
        let len = current.chars().count();
        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.timings.delete_ms
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.timings.type_ms
        };
        let visible: String = current.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay = self.timings.hold_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay = self.timings.next_ms;
        }
        Some(Step {
            visible,
            delay_ms: delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tw(texts: &[&str]) -> Typewriter {
        let mut t = Typewriter::new(TypingTimings::default());
        t.restart(texts.iter().map(|s| s.to_string()).collect());
        t
    }

    fn run(t: &mut Typewriter, n: usize) -> Vec<(String, u32)> {
        (0..n)
            .map(|_| {
                let s = t.step().unwrap();
                (s.visible, s.delay_ms)
            })
            .collect()
    }

    #[test]
    fn full_cycle_over_two_texts() {
        let mut t = tw(&["ab", "cd"]);
        let seq = run(&mut t, 9);
        let expect = [
            ("a", 150),
            ("ab", 2000),
            ("a", 75),
            ("", 500),
            ("c", 150),
            ("cd", 2000),
            ("c", 75),
            ("", 500),
            ("a", 150),
        ];
        for (got, (text, delay)) in seq.iter().zip(expect) {
            assert_eq!(got.0, text);
            assert_eq!(got.1, delay);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut t = tw(&["مرحبا"]);
        let first = t.step().unwrap();
        assert_eq!(first.visible, "م");
        let seq = run(&mut t, 4);
        assert_eq!(seq.last().unwrap(), &("مرحبا".to_string(), 2000));
    }

    #[test]
    fn empty_entry_does_not_stall() {
        let mut t = tw(&["", "x"]);
        assert_eq!(t.step().unwrap(), Step { visible: String::new(), delay_ms: 2000 });
        assert_eq!(t.step().unwrap(), Step { visible: String::new(), delay_ms: 500 });
        assert_eq!(t.step().unwrap().visible, "x");
    }

    #[test]
    fn restart_invalidates_old_generation() {
        let mut t = tw(&["hello"]);
        let old = t.generation();
        t.step();
        t.step();
        let new = t.restart(vec!["مرحبا".into()]);
        assert!(!t.is_current(old));
        assert!(t.is_current(new));
        assert_eq!(t.step().unwrap().visible, "م");
    }

    #[test]
    fn nothing_to_type() {
        let mut t = Typewriter::new(TypingTimings::default());
        assert!(t.step().is_none());
        assert!(!t.is_current(t.generation()));
    }
}
