//! Streaming Demo: Simulates token-by-token agent output.
//!
//! This example feeds a markdown document through the streaming pipeline at
//! roughly 100 tokens/s to show stable, append-only rendering: the growing
//! table never re-flows and the setext heading never restyles emitted text.

use ballast::{run_stream, StreamOptions};
use std::io::{self, Read};
use std::thread;
use std::time::Duration;

/// Sample text to stream (simulating an agent response).
const SAMPLE_TEXT: &str = r#"Ballast Streaming Demo
======================

The text you are reading arrived a few bytes at a time, but nothing on
screen was ever rewritten: the pipeline only commits lines that cannot be
restyled by later input.

## Why tables are the hard case

A markdown renderer lays a table out from the widest cell it has seen, so a
growing table re-flows on every row. Ballast freezes the column widths when
the header arrives and renders the grid itself:

| stage | what it does |
| --- | --- |
| commit | selects lines no future input can restyle |
| rewrite | freezes tables into fixed-width grids |
| delta | appends only the new suffix of each snapshot |

## Code fences stay balanced

```rust
// An unterminated fence is closed at the cut point, so pending
// text is never swallowed into a code block.
let stable = true;
```

That's the whole trick: commit conservatively, freeze what re-flows, and
only ever append.
"#;

/// A reader that serves a fixed document in small, slow chunks.
struct SimulatedTokens {
    data: &'static [u8],
    pos: usize,
}

impl Read for SimulatedTokens {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() {
            return Ok(0);
        }

        // ~12 bytes every 10ms is in the ballpark of 100 tokens/s.
        thread::sleep(Duration::from_millis(10));
        let end = (self.pos + 12).min(self.data.len());
        let n = (end - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ballast Streaming Demo");
    println!("======================");
    println!("Simulating ~100 tokens/s of agent output.\n");

    let source = SimulatedTokens {
        data: SAMPLE_TEXT.as_bytes(),
        pos: 0,
    };

    run_stream(source, io::stdout(), StreamOptions::default())?;
    Ok(())
}
