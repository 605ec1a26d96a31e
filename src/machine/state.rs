use std::fmt;

/// Where the selection pad is between key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    /// A row letter was pressed and is waiting for its column.
    RowPending(char),
}

/// An append-only output line log. Observers only care about the last line.
#[derive(Debug, Default, Clone)]
pub struct Channel {
    lines: Vec<String>,
}

impl Channel {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// What lands in the product slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vend {
    pub count: u32,
    pub name: String,
}

impl fmt::Display for Vend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.count == 1 { "has" } else { "have" };
        write!(f, "{} {} product {verb} been vended", self.count, self.name)
    }
}
