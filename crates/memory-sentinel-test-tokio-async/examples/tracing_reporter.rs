use memory_sentinel::{Event, Reporter, ScopedSentinel};
use std::time::Duration;
use tracing::{info, warn};

struct TracingReporter;

impl Reporter for TracingReporter {
    fn transgression(&self, event: &Event) {
        warn!(
            operation = %event.operation,
            size = event.size,
            remaining_quota = event.remaining_quota,
            "Transgression detected"
        );
    }

    fn permitted(&self, event: &Event) {
        info!(
            operation = %event.operation,
            size = event.size,
            remaining_quota = event.remaining_quota,
            "Allocation within quota"
        );
    }
}

async fn render(frame: u64) -> String {
    tokio::time::sleep(Duration::from_millis(1)).await;
    format!("frame {frame}")
}

fn checksum(frame: &str) -> usize {
    frame.bytes().map(usize::from).sum()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_ansi(false).init();
    memory_sentinel::set_reporter(Box::new(TracingReporter));
    // the subscriber's per-thread buffers are set up on first use
    info!("Reporter installed");

    for i in 0..3 {
        let frame = render(i).await;

        let sentinel = ScopedSentinel::new();
        let sum = checksum(&frame);
        let clean = !sentinel.finish();
        info!(frame = %frame, sum, clean, "Checked frame");

        let sentinel = ScopedSentinel::new();
        let upper = frame.to_uppercase();
        let clean = !sentinel.finish();
        info!(frame = %upper, clean, "Converted frame");
    }

    let sentinel = ScopedSentinel::with_quota(128);
    let label = memory_sentinel::heap::new_slice(64, b'x');
    let transgressed = sentinel.finish();
    info!(ok = label.is_ok(), transgressed, "Labelled within quota");

    Ok(())
}
