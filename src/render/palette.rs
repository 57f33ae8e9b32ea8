use indexmap::IndexMap;

use super::primitives::Color;

/// Ten-color categorical cycle (the matplotlib/d3 "category10" set).
pub const CATEGORY10: [Color; 10] = [
    Color::rgb8(0x1f, 0x77, 0xb4),
    Color::rgb8(0xff, 0x7f, 0x0e),
    Color::rgb8(0x2c, 0xa0, 0x2c),
    Color::rgb8(0xd6, 0x27, 0x28),
    Color::rgb8(0x94, 0x67, 0xbd),
    Color::rgb8(0x8c, 0x56, 0x4b),
    Color::rgb8(0xe3, 0x77, 0xc2),
    Color::rgb8(0x7f, 0x7f, 0x7f),
    Color::rgb8(0xbc, 0xbd, 0x22),
    Color::rgb8(0x17, 0xbe, 0xcf),
];

/// Categorical color assignment keyed by series name.
///
/// Names are assigned palette slots in first-seen order, so the same name
/// always resolves to the same color within one scale instance. Assignment
/// across instances depends on encounter order.
#[derive(Debug, Clone, Default)]
pub struct ColorScale {
    assigned: IndexMap<String, usize>,
}

impl ColorScale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the color for `name`, assigning the next free slot on first
    /// sight. The cycle wraps when more names than palette entries appear.
    pub fn color_for(&mut self, name: &str) -> Color {
        let next = self.assigned.len();
        let index = match self.assigned.get(name) {
            Some(index) => *index,
            None => {
                self.assigned.insert(name.to_owned(), next);
                next
            }
        };
        CATEGORY10[index % CATEGORY10.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
