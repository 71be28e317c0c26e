// Example: a minimal host and a scripted scroll through the fix/recede thresholds.
use std::collections::BTreeSet;

use elasticky::{Elasticky, ElastickyOptions, EventKind, EventTarget, Host};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Root;

#[derive(Default)]
struct Page {
    y: f64,
    classes: BTreeSet<String>,
}

impl Host for Page {
    type Element = Root;

    fn query_selector(&self, _selector: &str) -> Option<Root> {
        None
    }

    fn document_element(&self) -> Root {
        Root
    }

    fn page_y_offset(&self) -> f64 {
        self.y
    }

    fn scroll_top(&self, _element: &Root) -> f64 {
        0.0
    }

    fn computed_padding_top(&self, _element: &Root) -> String {
        "80px".to_string()
    }

    fn add_class(&mut self, _element: &Root, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, _element: &Root, class: &str) {
        self.classes.remove(class);
    }

    fn add_listener(&mut self, _target: &EventTarget<Root>, _event: EventKind) {}

    fn remove_listener(&mut self, _target: &EventTarget<Root>, _event: EventKind) {}
}

fn main() {
    let mut page = Page::default();
    let mut w = Elasticky::new(ElastickyOptions::new().with_delay_ms(0)).unwrap();
    w.start(&mut page, 0);

    let script = [
        (100, 40.0),
        (200, 120.0),
        (300, 400.0),
        (400, 300.0),
        (500, 380.0),
        (600, 20.0),
    ];
    for (now_ms, y) in script {
        page.y = y;
        w.on_scroll(&mut page, now_ms);
        w.advance(&mut page, now_ms);
        println!(
            "t={now_ms}ms y={y} state={:?} classes={:?}",
            w.state(),
            page.classes
        );
    }

    w.stop(&mut page);
    println!("stopped: classes={:?}", page.classes);
}
