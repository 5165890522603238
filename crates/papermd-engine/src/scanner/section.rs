use std::fmt;

/// Heading counters for each open nesting level, e.g. `[2, 3]` for "2.3".
///
/// The length always equals the depth of the most recent heading and no
/// counter is ever zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPath(Vec<u32>);

/// Nesting levels opened and closed by a single [`SectionPath::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub opened: usize,
    pub closed: usize,
}

impl SectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn counters(&self) -> &[u32] {
        &self.0
    }

    /// Moves the path to the next heading at `depth` (which must be >= 1).
    ///
    /// A deeper heading pushes `1` for every missing level. An equal or
    /// shallower heading truncates to `depth` and bumps the last counter.
    pub fn advance(&mut self, depth: usize) -> Advance {
        debug_assert!(depth >= 1, "heading depth starts at 1");
        let current = self.0.len();
        if current < depth {
            self.0.resize(depth, 1);
            Advance {
                opened: depth - current,
                closed: 0,
            }
        } else {
            self.0.truncate(depth);
            if let Some(last) = self.0.last_mut() {
                *last += 1;
            }
            Advance {
                opened: 0,
                closed: current - depth,
            }
        }
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{counter}")?;
        }
        Ok(())
    }
}
