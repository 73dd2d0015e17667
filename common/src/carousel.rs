// featured article carousel
//
// the state is just the index of the leftmost visible slide.  how many slides fit on screen
// is re-derived from the viewport width on every transition rather than cached, so a resize
// only needs a recompute() to pull the index back into range

pub const WIDE_MIN_WIDTH: f64 = 1024.0;
pub const MEDIUM_MIN_WIDTH: f64 = 768.0;

pub fn visible_slides(width: f64) -> usize {
    if width >= WIDE_MIN_WIDTH {
        3
    } else if width >= MEDIUM_MIN_WIDTH {
        2
    } else {
        1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Carousel { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn max_index(&self, width: f64) -> usize {
        self.total.saturating_sub(visible_slides(width))
    }

    pub fn advance(&mut self, width: f64) {
        self.current = (self.current + 1).min(self.max_index(width));
    }

    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    // timer-driven rotation, which loops back to the start instead of sticking at the end
    pub fn wrap_advance(&mut self, width: f64) {
        if self.current >= self.max_index(width) {
            self.current = 0;
        } else {
            self.current += 1;
        }
    }

    pub fn recompute(&mut self, width: f64) {
        self.current = self.current.min(self.max_index(width));
    }

    // horizontal track offset as a percentage of the track width
    pub fn offset_percent(&self, width: f64) -> f64 {
        if self.current == 0 {
            return 0.0;
        }

        -(self.current as f64 * (100.0 / visible_slides(width) as f64))
    }

    pub fn transform(&self, width: f64) -> String {
        format!("translateX({}%)", self.offset_percent(width))
    }
}
