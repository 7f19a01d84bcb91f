use std::io::{self, Write};

pub const DEFAULT_MIN_LEVEL: usize = 1;
pub const DEFAULT_MAX_LEVEL: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBounds {
    pub min_level: usize,
    pub max_level: usize,
}

/// Owns everything a traversal needs. The word list and join set are fixed
/// once built, so any number of independent traversals can be started.
#[derive(Debug, Clone)]
pub struct Composer {
    words: Vec<String>,
    joins: Vec<String>,
    bounds: DepthBounds,
    allow_doubles: bool,
}

impl Composer {
    pub fn new(
        words: Vec<String>,
        joins: Vec<String>,
        bounds: DepthBounds,
        allow_doubles: bool,
    ) -> Self {
        Self {
            words,
            joins,
            bounds,
            allow_doubles,
        }
    }

    /// Starts a fresh traversal. `min_level` is not consulted: every level
    /// from 1 up to `max_level` is emitted.
    pub fn candidates(&self) -> Candidates<'_> {
        generate(
            &self.words,
            &self.joins,
            self.bounds.max_level,
            self.allow_doubles,
        )
    }

    /// Streams every candidate to `out`, one per line, and returns how many
    /// were written.
    pub fn write_to<W: Write>(&self, out: W) -> io::Result<u64> {
        write_candidates(self.candidates(), out)
    }
}

pub fn write_candidates<I, W>(candidates: I, mut out: W) -> io::Result<u64>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut written = 0u64;
    for candidate in candidates {
        out.write_all(candidate.as_bytes())?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

pub fn generate<'a>(
    words: &'a [String],
    joins: &'a [String],
    max_level: usize,
    allow_doubles: bool,
) -> Candidates<'a> {
    Candidates {
        words,
        joins,
        max_level,
        allow_doubles,
        next_root: 0,
        stack: Vec::new(),
    }
}

struct Frame {
    level: usize,
    candidate: String,
    word: usize,
    join: usize,
}

/// Depth-first, preorder walk over every concatenation path.
///
/// Children of a frame are visited in word order, and for each admitted word
/// in join order. A word is admitted when doubles are allowed or when it does
/// not occur anywhere inside the frame's candidate text.
pub struct Candidates<'a> {
    words: &'a [String],
    joins: &'a [String],
    max_level: usize,
    allow_doubles: bool,
    next_root: usize,
    stack: Vec<Frame>,
}

impl Candidates<'_> {
    fn visit(&mut self, level: usize, candidate: String) -> Option<String> {
        if level > self.max_level {
            return None;
        }
        // Leaves never get a frame: their children would all exceed max_level.
        if level < self.max_level && !self.joins.is_empty() {
            self.stack.push(Frame {
                level,
                candidate: candidate.clone(),
                word: 0,
                join: 0,
            });
        }
        Some(candidate)
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let words = self.words;
        let joins = self.joins;

        loop {
            let Some(frame) = self.stack.last_mut() else {
                let root = words.get(self.next_root)?;
                self.next_root += 1;
                if let Some(candidate) = self.visit(1, root.clone()) {
                    return Some(candidate);
                }
                continue;
            };

            let Some(word) = words.get(frame.word) else {
                self.stack.pop();
                continue;
            };

            if frame.join >= joins.len()
                || (frame.join == 0
                    && !self.allow_doubles
                    && frame.candidate.contains(word.as_str()))
            {
                frame.word += 1;
                frame.join = 0;
                continue;
            }

            let join = &joins[frame.join];
            frame.join += 1;

            let mut child =
                String::with_capacity(frame.candidate.len() + join.len() + word.len());
            child.push_str(&frame.candidate);
            child.push_str(join);
            child.push_str(word);
            let level = frame.level + 1;

            if let Some(candidate) = self.visit(level, child) {
                return Some(candidate);
            }
        }
    }
}
