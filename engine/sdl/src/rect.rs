use sdl2_sys as sdl;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis aligned rectangle with its origin at the top left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_size(w: i32, h: i32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    pub const fn size(&self) -> Point {
        Point {
            x: self.w,
            y: self.h,
        }
    }

    /// A rectangle without area.
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// The right and bottom edges are exclusive.
    pub const fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }

    pub fn has_intersection(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// The overlapping area, `None` when the rectangles only touch or either
    /// one is empty.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = (self.x + self.w).min(other.x + other.w);
        let bottom = (self.y + self.h).min(other.y + other.h);

        if right <= x || bottom <= y {
            return None;
        }

        Some(Rect::new(x, y, right - x, bottom - y))
    }

    /// The smallest rectangle containing both. Empty rectangles do not
    /// contribute.
    pub fn union(&self, other: &Rect) -> Rect {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Rect::default(),
            (true, false) => *other,
            (false, true) => *self,
            (false, false) => {
                let x = self.x.min(other.x);
                let y = self.y.min(other.y);
                let right = (self.x + self.w).max(other.x + other.w);
                let bottom = (self.y + self.h).max(other.y + other.h);
                Rect::new(x, y, right - x, bottom - y)
            }
        }
    }
}

impl From<sdl::Rect> for Rect {
    fn from(rect: sdl::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.w, rect.h)
    }
}

impl From<Rect> for sdl::Rect {
    fn from(rect: Rect) -> Self {
        sdl::Rect {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }
}

impl From<sdl::Point> for Point {
    fn from(point: sdl::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Point> for sdl::Point {
    fn from(point: Point) -> Self {
        sdl::Point {
            x: point.x,
            y: point.y,
        }
    }
}

/// Converts an optional rectangle to the pointer SDL expects, null meaning
/// the whole target.
pub(crate) fn raw_rect(rect: &Option<sdl::Rect>) -> *const sdl::Rect {
    match rect {
        Some(rect) => rect,
        None => std::ptr::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
        assert!(!Rect::new(-5, -5, 1, 1).is_empty());
    }

    #[test]
    fn contains_point_excludes_far_edges() {
        let rect = Rect::new(10, 20, 5, 5);
        assert!(rect.contains_point(Point::new(10, 20)));
        assert!(rect.contains_point(Point::new(14, 24)));
        assert!(!rect.contains_point(Point::new(15, 24)));
        assert!(!rect.contains_point(Point::new(14, 25)));
        assert!(!rect.contains_point(Point::new(9, 20)));
    }

    #[test]
    fn intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));
        assert!(a.has_intersection(&b));

        // Sharing an edge is not an overlap.
        let c = Rect::new(10, 0, 5, 5);
        assert_eq!(a.intersection(&c), None);
        assert!(!a.has_intersection(&c));

        assert_eq!(a.intersection(&Rect::new(2, 2, 0, 4)), None);
        assert_eq!(a.intersection(&a), Some(a));
    }

    #[test]
    fn union() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, -3, 1, 1);
        assert_eq!(a.union(&b), Rect::new(0, -3, 6, 5));
        assert_eq!(a.union(&Rect::default()), a);
        assert_eq!(Rect::new(3, 3, 0, 0).union(&b), b);
        assert_eq!(Rect::default().union(&Rect::new(9, 9, -1, 2)), Rect::default());
    }

    #[test]
    fn native_conversion() {
        let rect = Rect::new(1, 2, 3, 4);
        let raw: sdl::Rect = rect.into();
        assert_eq!((raw.x, raw.y, raw.w, raw.h), (1, 2, 3, 4));
        assert_eq!(Rect::from(raw), rect);
        assert!(raw_rect(&None).is_null());
    }
}
