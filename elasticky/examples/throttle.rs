// Example: a throttled callback driven by a simulated clock.
use elasticky::throttle;

fn main() {
    let mut log = Vec::new();
    {
        let mut f = throttle(|v: u32| log.push(v), 100, false);

        // A burst of calls every 16ms: one leading call, then one trailing call per window.
        let mut now_ms = 0u64;
        for v in 0..20u32 {
            f.advance(now_ms);
            f.call(v, now_ms);
            now_ms += 16;
        }
        f.advance(now_ms + 100);
    }
    println!("delivered={log:?}");
}
