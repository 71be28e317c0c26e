// Example: two widgets on one in-memory page, driven at ~60fps.
use elasticky::{Elasticky, ElastickyOptions, EventKind, EventTarget, ResizeMode};
use elasticky_adapter::{Driver, MemoryDocument};

fn main() {
    let mut doc = MemoryDocument::new();
    doc.set_padding_top(MemoryDocument::ROOT, "64px");
    let sidebar = doc.insert("#sidebar");
    let pane = doc.insert("#pane");

    let mut driver = Driver::new();
    driver.push(
        Elasticky::new(ElastickyOptions::new().with_resize(ResizeMode::Poll(500))).unwrap(),
    );
    driver.push(
        Elasticky::new(
            ElastickyOptions::new()
                .with_name("toc")
                .with_container_selector("#sidebar")
                .with_scroll_selector("#pane")
                .with_fix_at(200.0),
        )
        .unwrap(),
    );
    driver.start_all(&mut doc, 0);

    // Scroll the page down, then back up a little; scroll the pane steadily.
    let mut now_ms = 0u64;
    let mut last = (String::new(), String::new());
    for frame in 0..180u64 {
        now_ms += 16;
        let page_y = if frame < 90 {
            frame as f64 * 12.0
        } else {
            1080.0 - (frame - 90) as f64 * 4.0
        };
        doc.set_page_y(page_y);
        driver.dispatch(&mut doc, &EventTarget::Window, EventKind::Scroll, now_ms);

        doc.set_scroll_top(pane, frame as f64 * 3.0);
        driver.dispatch(&mut doc, &EventTarget::Element(pane), EventKind::Scroll, now_ms);

        driver.advance(&mut doc, now_ms);

        let current = (doc.class_name(MemoryDocument::ROOT), doc.class_name(sidebar));
        if current != last {
            println!(
                "t={now_ms}ms page_y={page_y} html=[{}] sidebar=[{}]",
                current.0, current.1
            );
            last = current;
        }
    }

    driver.stop_all(&mut doc);
    println!(
        "stopped: html=[{}] listeners={}",
        doc.class_name(MemoryDocument::ROOT),
        doc.listeners().len()
    );
}
