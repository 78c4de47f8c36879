#![no_main]

use arbitrary::Arbitrary;
use bytepipe::{BytePipe, Bytes, PipeReader, PipeWriter};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Push(Vec<u8>),
    PushChunk(Vec<u8>),
    Pop(usize),
    PopBytes(usize),
    Close,
    SetError,
}

#[derive(Debug, Arbitrary)]
struct Plan {
    capacity: u16,
    ops: Vec<Op>,
}

/// The same contract applied to a flat `Vec<u8>` in the most literal way.
struct Model {
    capacity: usize,
    buffered: Vec<u8>,
    pushed: u64,
    popped: u64,
    closed: bool,
    errored: bool,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffered: Vec::new(),
            pushed: 0,
            popped: 0,
            closed: false,
            errored: false,
        }
    }

    fn push(&mut self, data: &[u8]) -> usize {
        if self.closed || self.errored {
            return 0;
        }
        let fit = data.len().min(self.capacity - self.buffered.len());
        self.buffered.extend_from_slice(&data[..fit]);
        self.pushed += fit as u64;
        fit
    }

    fn pop(&mut self, len: usize) -> Vec<u8> {
        if self.errored {
            return Vec::new();
        }
        let take = len.min(self.buffered.len());
        self.popped += take as u64;
        self.buffered.drain(..take).collect()
    }
}

fn check(pipe: &BytePipe, model: &Model) {
    assert_eq!(pipe.bytes_buffered(), model.buffered.len());
    assert_eq!(pipe.bytes_pushed(), model.pushed);
    assert_eq!(pipe.bytes_popped(), model.popped);
    assert_eq!(
        pipe.available_capacity(),
        model.capacity - model.buffered.len()
    );
    assert_eq!(pipe.is_closed(), model.closed);
    assert_eq!(pipe.has_error(), model.errored);
    assert_eq!(
        pipe.is_finished(),
        model.closed && model.buffered.is_empty()
    );
    assert!(model.buffered.starts_with(pipe.peek()));
    assert_eq!(pipe.peek().is_empty(), model.buffered.is_empty());
}

fn run(plan: &Plan) {
    let capacity = usize::from(plan.capacity);
    let mut pipe = BytePipe::new(capacity);
    let mut model = Model::new(capacity);

    for op in &plan.ops {
        match op {
            Op::Push(data) => {
                assert_eq!(pipe.push(data), model.push(data));
            }
            Op::PushChunk(data) => {
                let got = pipe.push_chunk(Bytes::copy_from_slice(data));
                assert_eq!(got, model.push(data));
            }
            Op::Pop(len) => {
                pipe.pop(*len);
                let _ = model.pop(*len);
            }
            Op::PopBytes(len) => {
                assert_eq!(pipe.pop_bytes(*len), model.pop(*len));
            }
            Op::Close => {
                pipe.close();
                model.closed = true;
            }
            Op::SetError => {
                pipe.set_error();
                model.errored = true;
            }
        }
        check(&pipe, &model);
    }
}

fuzz_target!(|plan: Plan| run(&plan));
