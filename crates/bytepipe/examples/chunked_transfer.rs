//! Relays a download that arrives in irregular bursts through a small fixed
//! window, so the slow side of the transfer controls memory use.
//!
//! The producer never sees an error from a full window: `push` accepts what
//! fits, reports how much, and the producer resumes from that offset once
//! the consumer frees space. The consumer drains at its own pace with
//! `peek` and `pop`. When the producer is done it calls `close`, and the
//! consumer keeps draining until `is_finished` reports that the stream is
//! over, not merely idle.
//!
//! Run with
//!
//! ```bash
//! cargo run -p bytepipe --example chunked_transfer
//! ```

use bytepipe::{BytePipe, PipeReader, PipeWriter};

fn main() {
    // A toy transfer delivered in bursts of uneven size. In real life these
    // would come off a socket.
    let bursts: [&[u8]; 6] = [
        b"flow ",
        b"control ",
        b"means the slow side ",
        b"sets ",
        b"the pace, ",
        b"not the fast one.",
    ];

    // Eight bytes of elasticity between producer and consumer.
    let mut pipe = BytePipe::new(8);
    let mut received = Vec::new();

    for burst in bursts {
        let mut pending = burst;
        while !pending.is_empty() {
            let accepted = pipe.push(pending);
            pending = &pending[accepted..];
            if !pending.is_empty() {
                // Window full. Let the consumer catch up, then resume.
                drain_front(&mut pipe, &mut received);
            }
        }
    }
    pipe.close();

    // The tail is still buffered; the consumer finishes at its leisure.
    while !pipe.is_finished() {
        drain_front(&mut pipe, &mut received);
    }

    let text = String::from_utf8(received).expect("payload is UTF-8");
    println!("relayed: {text:?}");
    println!(
        "pushed {} bytes in total, popped {}, window still {} bytes wide",
        pipe.bytes_pushed(),
        pipe.bytes_popped(),
        pipe.capacity(),
    );
}

/// Takes the front chunk off the pipe, the way a consumer task would.
fn drain_front(pipe: &mut BytePipe, received: &mut Vec<u8>) {
    let front = pipe.peek();
    received.extend_from_slice(front);
    let taken = front.len();
    pipe.pop(taken);
    println!(
        "consumer took {taken:2} bytes, {} free in the window",
        pipe.available_capacity()
    );
}
