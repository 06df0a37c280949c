use std::{cell::RefCell, rc::Rc, time::Duration};

use super::feedback::Timer;

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Clock {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, Task)>,
}

/// Timer driven by hand: tasks run when `advance` moves the clock past them.
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTimer {
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            // take the task out before running it, it may schedule more
            let task = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(i, _)| i);
                match next {
                    Some(i) => {
                        let (due, _, task) = clock.pending.remove(i);
                        clock.now = due;
                        task
                    }
                    None => break,
                }
            };
            task();
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Timer for ManualTimer {
    fn after(&self, delay: Duration, task: impl FnOnce() + 'static) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.seq += 1;
        let seq = clock.seq;
        clock.pending.push((due, seq, Box::new(task)));
    }
}
