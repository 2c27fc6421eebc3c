// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    #[inline(always)]
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    // (row, col) step when moving towards increasing index.
    #[inline(always)]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
        }
    }

    // position along this axis.
    #[inline(always)]
    pub fn idx(self, row: i8, col: i8) -> i8 {
        match self {
            Axis::Horizontal => col,
            Axis::Vertical => row,
        }
    }
}

#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i16,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols as i16,
            len: self.rows,
        }
    }

    // the line through (row, col) along axis.
    #[inline(always)]
    pub fn lane(&self, axis: Axis, row: i8, col: i8) -> Strider {
        match axis {
            Axis::Horizontal => self.across(row),
            Axis::Vertical => self.down(col),
        }
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        (0..self.rows).contains(&row) && (0..self.cols).contains(&col)
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
