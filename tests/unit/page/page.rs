use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use super::*;
use crate::{
    assets::decode::PreparedImage, sequence::loader::LoadEvent,
    ui::progress::ProgressIndicators,
};

fn page(frame_count: u32, threshold: u32) -> Page {
    let config = SequenceConfig {
        frame_count,
        boot_threshold: threshold,
        viewport: Viewport::new(4, 1000).unwrap(),
        ..SequenceConfig::default()
    };
    let layout = PageLayout {
        hero_top: 0.0,
        hero_height: 5000.0,
        section_tops: vec![4500.0, 8000.0],
        scrub_lag: 0.0,
    };
    Page::new(config, layout, Box::new(ProgressIndicators::default())).unwrap()
}

fn load(page: &mut Page, index: u32) {
    page.player_mut().handle_event(LoadEvent::Frame {
        index,
        result: Ok(PreparedImage {
            width: 1,
            height: 1,
            rgba8_premul: Arc::new(vec![index as u8, 0, 0, 255]),
        }),
    });
}

#[test]
fn effects_wait_for_boot_but_gauge_and_cursor_run() {
    let mut p = page(10, 3);
    p.on_scroll(ScrollEvent {
        scroll_y: 2000.0,
        velocity: 40.0,
    });
    p.on_pointer_move(Point::new(1.0, 2.0));
    let frame = p.tick(1.0 / 60.0);
    assert!(frame.reveals.is_none());
    assert!(frame.scrub.is_none());
    assert!(frame.gauge.rpm > 900.0);
    assert_eq!(frame.cursor.position, Point::new(1.0, 2.0));
    assert_eq!(frame.overlay_opacity, 1.0);
    assert!(p.overlay_visible());
}

#[test]
fn boot_registers_scrub_reveals_and_fades_overlay() {
    let hooked = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hooked);
    let mut p = page(10, 2).with_boot_hook(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    p.on_scroll(ScrollEvent {
        scroll_y: 2000.0,
        velocity: 0.0,
    });
    for i in 1..=10 {
        load(&mut p, i);
    }
    assert_eq!(hooked.load(Ordering::SeqCst), 1);

    let frame = p.tick(0.5);
    assert_eq!(frame.booted, Some(BootTrigger::Threshold));
    // Hero spans 0..4000 of scroll; 2000 is halfway: 1 + 0.5 * 9 = 5.5.
    let scrub = frame.scrub.unwrap();
    assert_eq!(scrub.whole_frame, 5);
    assert!(scrub.render.painted());
    let reveals = frame.reveals.unwrap();
    assert_eq!(reveals.sections.len(), 2);
    assert_eq!(frame.overlay_opacity, 0.5);

    let frame = p.tick(0.6);
    assert!(frame.booted.is_none());
    assert_eq!(frame.overlay_opacity, 0.0);
    assert!(!p.overlay_visible());
}

#[test]
fn scrolling_after_boot_scrubs_and_triggers_sections() {
    let mut p = page(10, 1);
    load(&mut p, 1);
    load(&mut p, 10);
    p.tick(0.016);

    p.on_scroll(ScrollEvent {
        scroll_y: 4000.0,
        velocity: 5.0,
    });
    let frame = p.tick(0.016);
    let scrub = frame.scrub.unwrap();
    assert_eq!(scrub.frame_label, "010 / 10");
    assert_eq!(p.player().surface().pixel(0, 0), Some([10, 0, 0, 255]));
    let reveals = frame.reveals.unwrap();
    assert!(reveals.sections[0].opacity > 0.0);
    assert_eq!(reveals.sections[1].opacity, 0.0);
    assert_eq!(reveals.title.opacity, 0.0);
}

#[test]
fn resize_rebuilds_hero_region() {
    let mut p = page(10, 1);
    assert_eq!(p.hero_region(), ScrollRegion::new(0.0, 4000.0));
    p.on_resize(Viewport::new(4, 2000).unwrap());
    assert_eq!(p.hero_region(), ScrollRegion::new(0.0, 3000.0));
    assert_eq!(p.player().surface().height(), 2000);
}
