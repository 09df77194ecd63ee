//! Leptos Carousel Utilities
//!
//! Slide index state for simple image carousels.
//! Looping carousels wrap around at both ends; non-looping ones clamp.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Carousel state signals
#[derive(Clone, Copy)]
pub struct CarouselSignals {
    pub selected_read: ReadSignal<usize>,
    pub selected_write: WriteSignal<usize>,
    /// Number of slides; fixed for the carousel's lifetime
    pub len: usize,
    /// Wrap around at the ends
    pub looping: bool,
}

pub fn create_carousel_signals(len: usize, looping: bool) -> CarouselSignals {
    let (selected_read, selected_write) = signal(0usize);
    CarouselSignals {
        selected_read,
        selected_write,
        len,
        looping,
    }
}

/// Move `delta` slides from `current`.
///
/// Returns 0 for an empty carousel.
pub fn step_index(current: usize, len: usize, delta: isize, looping: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i = len as isize;
    let current = current.min(len - 1) as isize;
    let next = current + delta;
    if looping {
        next.rem_euclid(len_i) as usize
    } else {
        next.clamp(0, len_i - 1) as usize
    }
}

/// Clamp a requested slide to the last one
pub fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

/// Show the previous slide
pub fn scroll_prev(carousel: &CarouselSignals) {
    let (len, looping) = (carousel.len, carousel.looping);
    carousel
        .selected_write
        .try_update(|idx| *idx = step_index(*idx, len, -1, looping));
}

/// Show the next slide
pub fn scroll_next(carousel: &CarouselSignals) {
    let (len, looping) = (carousel.len, carousel.looping);
    carousel
        .selected_write
        .try_update(|idx| *idx = step_index(*idx, len, 1, looping));
}

/// Jump to a slide (clamped to the last one)
pub fn scroll_to(carousel: &CarouselSignals, index: usize) {
    carousel.selected_write.try_set(clamp_index(index, carousel.len));
}

/// Is there more than one slide to move between
pub fn can_scroll(carousel: &CarouselSignals) -> bool {
    carousel.len > 1
}

/// Bind ArrowLeft / ArrowRight on the window to this carousel.
/// Keys typed into inputs are ignored. The listener is removed when the
/// owning component is disposed.
pub fn bind_arrow_keys(carousel: CarouselSignals) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
        }
        match ev.key().as_str() {
            "ArrowLeft" => scroll_prev(&carousel),
            "ArrowRight" => scroll_next(&carousel),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_index_loops() {
        assert_eq!(step_index(0, 3, -1, true), 2);
        assert_eq!(step_index(2, 3, 1, true), 0);
        assert_eq!(step_index(1, 3, 1, true), 2);
    }

    #[test]
    fn test_step_index_clamps_without_loop() {
        assert_eq!(step_index(0, 3, -1, false), 0);
        assert_eq!(step_index(2, 3, 1, false), 2);
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(1, 3), 1);
        assert_eq!(clamp_index(7, 3), 2);
        assert_eq!(clamp_index(4, 0), 0);
    }

    #[test]
    fn test_step_index_empty_and_out_of_range() {
        assert_eq!(step_index(5, 0, 1, true), 0);
        // Stale index from a longer image list
        assert_eq!(step_index(9, 2, 1, true), 0);
    }
}
